//! Scene state and timeline types
//!
//! [`SceneState`] is the owned simulation context: the frame clock, the
//! narrative timeline, every animator, and the seeded RNG all live here and
//! are passed explicitly to the per-frame tick. Nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::agents::PedestrianSwarm;
use super::ambient::{CloudDrift, FlagWave, VehicleLoop};
use super::clock::FrameClock;
use super::particles::{DebrisField, FirecrackerBurst};
use super::trajectory::{DronePatrol, RocketFlight};
use crate::Tunables;
use crate::consts::*;

/// One-shot audio cue identifiers.
///
/// The audio sink is fire-and-forget; each cue is requested at most once per
/// activation of its owning transition, which the choreographer guarantees by
/// emitting cues only at the transition edge itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CueId {
    /// A missile leaves the launch roof
    MissileLaunch,
    /// The second hit levels the building
    Explosion,
    /// The firecracker celebration begins
    Celebration,
}

/// Events emitted by the choreographer for external collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneEvent {
    Cue(CueId),
}

/// Global narrative state, advanced only by the choreographer.
///
/// `missile_hit_count` is monotonic 0 -> 1 -> 2 within a run;
/// `building_destroyed` flips true exactly when the count reaches 2 and only
/// an explicit reset reverts either.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    /// Pre-strike countdown readout, 10 down to 0
    pub countdown: u32,
    /// Number of missile impacts so far (0..=2)
    pub missile_hit_count: u32,
    /// Whether a missile is currently in flight
    pub missile_active: bool,
    pub building_destroyed: bool,
    /// Elapsed time of the first impact, once it happens
    pub first_hit_time: Option<f32>,
    /// Elapsed time of the destruction impact, once it happens
    pub building_destroyed_time: Option<f32>,
    /// Whether the firecracker celebration loop is running
    pub celebration_active: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            countdown: 10,
            missile_hit_count: 0,
            missile_active: false,
            building_destroyed: false,
            first_hit_time: None,
            building_destroyed_time: None,
            celebration_active: false,
        }
    }
}

/// Complete scene state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for all visual randomness
    pub rng: Pcg32,
    /// Timing tunables (fixed defaults unless configured at construction)
    pub tunables: Tunables,
    pub clock: FrameClock,
    pub timeline: Timeline,

    // Animators
    pub rocket: RocketFlight,
    pub drone: DronePatrol,
    pub clouds: CloudDrift,
    pub vehicles: VehicleLoop,
    pub flag: FlagWave,
    pub pedestrians: PedestrianSwarm,
    pub debris: DebrisField,
    pub firecrackers: FirecrackerBurst,
    /// In-animation seconds since destruction, drives flash/fire/smoke
    pub explosion_time: f32,

    /// Events produced this frame, drained by the outer shell
    #[serde(skip)]
    events: Vec<SceneEvent>,
}

impl SceneState {
    /// Create a fresh scene with the given seed and default tunables
    pub fn new(seed: u64) -> Self {
        Self::with_tunables(seed, Tunables::default())
    }

    /// Create a fresh scene with explicit tunables
    pub fn with_tunables(seed: u64, tunables: Tunables) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = CloudDrift::seed(&mut rng);
        let pedestrians = PedestrianSwarm::seed(&mut rng);
        Self {
            seed,
            rng,
            tunables,
            clock: FrameClock::new(),
            timeline: Timeline::default(),
            rocket: RocketFlight::new(),
            drone: DronePatrol::new(),
            clouds,
            vehicles: VehicleLoop::new(),
            flag: FlagWave::new(),
            pedestrians,
            debris: DebrisField::new(),
            firecrackers: FirecrackerBurst::new(),
            explosion_time: 0.0,
            events: Vec::new(),
        }
    }

    /// Restore every timeline field and animator to its initial state,
    /// atomically from the choreographer's perspective. The only path that
    /// may take `missile_hit_count` back to 0 or `building_destroyed` back
    /// to false; cues re-arm because their transitions can fire again.
    pub fn reset(&mut self) {
        *self = Self::with_tunables(self.seed, self.tunables.clone());
        log::info!("scene reset (seed {})", self.seed);
    }

    /// The point where missiles strike the target building
    pub fn impact_point(&self) -> Vec2 {
        Vec2::new(TARGET_ROOF_X, TARGET_ROOF_Y)
    }

    /// Whether the renderer should show the victory banner
    pub fn show_victory_banner(&self) -> bool {
        self.timeline.building_destroyed
    }

    pub(crate) fn push_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    /// Drain the events produced since the last drain (one frame's worth
    /// when called once per frame)
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_timeline() {
        let state = SceneState::new(1);
        assert_eq!(state.timeline.countdown, 10);
        assert_eq!(state.timeline.missile_hit_count, 0);
        assert!(!state.timeline.missile_active);
        assert!(!state.timeline.building_destroyed);
        assert!(state.timeline.first_hit_time.is_none());
        assert!(!state.timeline.celebration_active);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let a = SceneState::new(99);
        let b = SceneState::new(99);
        for (pa, pb) in a.pedestrians.agents().iter().zip(b.pedestrians.agents()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.shirt, pb.shirt);
        }
        for (ca, cb) in a.clouds.positions().iter().zip(b.clouds.positions()) {
            assert_eq!(ca.pos, cb.pos);
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = SceneState::new(5);
        // Scribble over the timeline as if a full run had happened
        state.timeline.missile_hit_count = 2;
        state.timeline.building_destroyed = true;
        state.timeline.celebration_active = true;
        state.explosion_time = 1.5;
        state.clock.tick(0.016);

        state.reset();
        assert_eq!(state.timeline.missile_hit_count, 0);
        assert!(!state.timeline.building_destroyed);
        assert!(!state.timeline.celebration_active);
        assert_eq!(state.explosion_time, 0.0);
        assert_eq!(state.clock.elapsed(), 0.0);
        assert!(state.firecrackers.particles().is_empty());
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = SceneState::new(3);
        state.push_event(SceneEvent::Cue(CueId::MissileLaunch));
        assert_eq!(
            state.drain_events(),
            vec![SceneEvent::Cue(CueId::MissileLaunch)]
        );
        assert!(state.drain_events().is_empty());
    }
}
