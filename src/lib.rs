//! City Vignette - choreography core for a looping 2D night scene
//!
//! Core modules:
//! - `sim`: Deterministic simulation (timeline state machine, entity animators)
//! - `settings`: Data-driven timing/speed tunables
//!
//! Rendering, audio playback, and input are external collaborators: the
//! renderer queries entity state each frame, the audio sink consumes the
//! one-shot cue events drained from [`sim::SceneState`].

pub mod settings;
pub mod sim;

pub use settings::Tunables;
pub use sim::{CueId, SceneEvent, SceneState, tick};

/// Scene configuration constants
pub mod consts {
    /// Reference frame duration all per-frame speeds are tuned against (60 FPS)
    pub const REFERENCE_DT: f32 = 1.0 / 60.0;
    /// Raw deltas above this are treated as stalls and replaced by REFERENCE_DT
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Seconds before the first missile launches
    pub const MISSILE_DELAY: f32 = 10.0;
    /// Seconds between the first hit and the second launch
    pub const SECOND_MISSILE_DELAY: f32 = 4.0;
    /// Seconds between destruction and the firecracker celebration
    pub const FIRECRACKER_DELAY: f32 = 4.0;

    /// Per-reference-frame progress increments
    pub const ROCKET_SPEED: f32 = 0.0083;
    pub const DRONE_SPEED: f32 = 0.00238;
    pub const CLOUD_SPEED: f32 = 0.008;
    pub const VEHICLE_SPEED: f32 = 0.05;
    pub const FLAG_WAVE_SPEED: f32 = 0.05;
    pub const EXPLOSION_SPEED: f32 = 0.02;
    pub const WALK_CYCLE_SPEED: f32 = 0.1;
    pub const CELEBRATION_CYCLE_SPEED: f32 = 0.08;

    /// Scene anchor points (world units, x in [-40, 40], y in [0, 20])
    pub const LAUNCH_ROOF_X: f32 = 22.0;
    pub const LAUNCH_ROOF_Y: f32 = 16.8;
    pub const TARGET_ROOF_X: f32 = -22.0;
    pub const TARGET_ROOF_Y: f32 = 10.9;
    /// Peak of the rocket's parabolic bump over the straight-line path
    pub const ROCKET_ARC_HEIGHT: f32 = 4.0;
    /// Fixed patrol altitude for the drone
    pub const DRONE_ALTITUDE: f32 = 12.0;
    /// Road surface Y, pedestrians and vehicles live just above it
    pub const ROAD_Y: f32 = 1.8;

    /// Horizontal wrap width for cloud and vehicle drift loops
    pub const DRIFT_LOOP_WIDTH: f32 = 80.0;
    /// Drift entities wrap once they pass this X
    pub const DRIFT_WRAP_X: f32 = 40.0;
    /// Number of drifting clouds
    pub const CLOUD_COUNT: usize = 6;

    /// Fixed pool capacities
    pub const MAX_DEBRIS: usize = 30;
    pub const MAX_FIRECRACKERS: usize = 7;
    pub const PEDESTRIAN_COUNT: usize = 30;

    /// Firecracker/building explosion animations run for this long (seconds
    /// of in-animation time, advanced by EXPLOSION_SPEED per reference frame)
    pub const EXPLOSION_DURATION: f32 = 2.0;
}

/// An RGB color in [0, 1] component space
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Scale all components, clamping into [0, 1]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: (self.r * factor).clamp(0.0, 1.0),
            g: (self.g * factor).clamp(0.0, 1.0),
            b: (self.b * factor).clamp(0.0, 1.0),
        }
    }
}

/// Linear interpolation between a and b
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}
