//! Deterministic simulation module
//!
//! All choreography logic lives here. This module must be pure and
//! deterministic:
//! - Frame-time normalized against a 60 FPS reference
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Per-frame control flow: [`clock::FrameClock::tick`] normalizes the raw
//! delta, [`tick`] evaluates timeline transitions and advances every active
//! animator, then the renderer queries entity state. Cross-animator causality
//! only flows through the choreographer in `tick.rs`; no animator touches
//! another animator's state.

pub mod agents;
pub mod ambient;
pub mod clock;
pub mod effects;
pub mod particles;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use agents::{Pedestrian, PedestrianMode, PedestrianSwarm};
pub use ambient::{CloudDrift, FlagWave, VehicleLoop};
pub use clock::FrameClock;
pub use effects::{ExplosionFlash, FireFlame, FireworkBurst, FlashRing, SmokePuff, smoke_puffs};
pub use particles::{DebrisField, Firecracker, FirecrackerBurst, TrajectoryKind};
pub use state::{CueId, SceneEvent, SceneState, Timeline};
pub use tick::tick;
pub use trajectory::{DronePatrol, RocketFlight};
