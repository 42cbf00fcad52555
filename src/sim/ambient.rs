//! Ambient loopers: cloud drift, road traffic, flag wave
//!
//! Periodic background motion, fully independent of the missile timeline.
//! Each owns an unbounded phase (or a wrapping offset) and advances by a
//! per-reference-frame speed scaled by the frame clock.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Top of the world coordinate space the sky entities live in
const WORLD_TOP_Y: f32 = 20.0;

/// Fixed base layout for the cloud bank
const CLOUD_BASE_X: [f32; CLOUD_COUNT] = [-30.0, -20.0, -8.0, 8.0, 20.0, 30.0];
const CLOUD_SCALE: [f32; CLOUD_COUNT] = [1.2, 1.0, 1.1, 0.9, 1.0, 1.1];

/// Renderer-facing cloud pose
#[derive(Debug, Clone, Copy)]
pub struct CloudPose {
    pub pos: Vec2,
    pub scale: f32,
}

/// Slow left-to-right cloud drift with per-cloud Y jitter picked at seed time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudDrift {
    offset_x: f32,
    y_positions: [f32; CLOUD_COUNT],
}

impl CloudDrift {
    /// Seed Y positions into the upper sky band (85-95% of world height)
    pub fn seed(rng: &mut impl Rng) -> Self {
        let mut y_positions = [0.0; CLOUD_COUNT];
        for y in &mut y_positions {
            *y = rng.random_range(WORLD_TOP_Y * 0.85..WORLD_TOP_Y * 0.95);
        }
        Self {
            offset_x: 0.0,
            y_positions,
        }
    }

    #[inline]
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn advance(&mut self, time_scale: f32) {
        self.offset_x += CLOUD_SPEED * time_scale;
        if self.offset_x >= DRIFT_LOOP_WIDTH {
            self.offset_x -= DRIFT_LOOP_WIDTH;
        }
    }

    /// Current cloud poses, wrapped back to the left past the scene edge
    pub fn positions(&self) -> [CloudPose; CLOUD_COUNT] {
        std::array::from_fn(|i| {
            let mut x = CLOUD_BASE_X[i] + self.offset_x;
            if x > DRIFT_WRAP_X {
                x -= DRIFT_LOOP_WIDTH;
            }
            CloudPose {
                pos: Vec2::new(x, self.y_positions[i]),
                scale: CLOUD_SCALE[i],
            }
        })
    }
}

/// Fixed starting offsets for the three cars on the road
const VEHICLE_BASE_X: [f32; 3] = [-35.0, -10.0, 15.0];

/// Looping road traffic
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleLoop {
    offset_x: f32,
}

impl VehicleLoop {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn advance(&mut self, time_scale: f32) {
        self.offset_x += VEHICLE_SPEED * time_scale;
        if self.offset_x >= DRIFT_LOOP_WIDTH {
            self.offset_x -= DRIFT_LOOP_WIDTH;
        }
    }

    /// Current vehicle positions on the road surface
    pub fn positions(&self) -> [Vec2; 3] {
        std::array::from_fn(|i| {
            let mut x = VEHICLE_BASE_X[i] + self.offset_x;
            if x > DRIFT_WRAP_X {
                x -= DRIFT_LOOP_WIDTH;
            }
            Vec2::new(x, ROAD_Y + 0.5)
        })
    }
}

/// Waving-flag phase shared by every flag in the scene
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlagWave {
    phase: f32,
}

impl FlagWave {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn advance(&mut self, time_scale: f32) {
        self.phase += FLAG_WAVE_SPEED * time_scale;
        if self.phase > std::f32::consts::TAU {
            self.phase -= std::f32::consts::TAU;
        }
    }

    /// Horizontal wave offset for a flag whose pole sits at `pole_x`;
    /// the per-pole term desynchronizes the two flags.
    pub fn offset_at(&self, pole_x: f32) -> f32 {
        (self.phase + pole_x * 0.5).sin() * 0.3
    }
}
