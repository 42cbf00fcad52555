//! Pedestrian agents marching to the celebration spot
//!
//! Agents are independent: no collision, no ordering constraints. Each walks
//! toward the fixed destination, then snaps to a random stop position nearby
//! and celebrates with a cyclic arm-raise. `WalkingReturn` is part of the
//! declared mode set but currently has no trigger path; arrival goes straight
//! to `Celebrating` (pending product clarification, see DESIGN.md).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Rgb;
use crate::consts::*;

/// Where the outbound walk ends
const WALK_DESTINATION_X: f32 = TARGET_ROOF_X;
/// Agents start lined up from here, spaced backwards
const WALK_START_X: f32 = LAUNCH_ROOF_X;
/// Gap between agents in the starting line
const AGENT_SPACING: f32 = 1.2;
/// The furthest agent arrives within this many seconds
const ARRIVAL_TARGET_SECS: f32 = 10.0;
/// Safety multiplier over the minimum required speed
const ARRIVAL_MARGIN: f32 = 1.1;
/// Celebration stop positions scatter within this range of the destination
const STOP_SCATTER: f32 = 4.0;

const SHIRT_PALETTE: [Rgb; 4] = [
    Rgb::new(0.8, 0.2, 0.2),
    Rgb::new(0.2, 0.2, 0.8),
    Rgb::new(0.2, 0.8, 0.2),
    Rgb::new(0.8, 0.8, 0.2),
];

/// Three-state pedestrian mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PedestrianMode {
    WalkingOutbound,
    WalkingReturn,
    Celebrating,
}

/// One pedestrian agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pedestrian {
    pub pos: Vec2,
    pub mode: PedestrianMode,
    /// Cyclic walk phase in [0, 1)
    pub walk_phase: f32,
    /// Cyclic arm-raise phase in [0, 1)
    pub celebration_phase: f32,
    pub shirt: Rgb,
    /// World units per second, fixed at seed time
    pub speed: f32,
}

impl Pedestrian {
    /// Whether the walk-cycle animation should play
    pub fn is_walking(&self) -> bool {
        matches!(
            self.mode,
            PedestrianMode::WalkingOutbound | PedestrianMode::WalkingReturn
        )
    }
}

/// The full crowd
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PedestrianSwarm {
    agents: Vec<Pedestrian>,
}

impl PedestrianSwarm {
    /// Seed the crowd: a line of agents spaced back from the start point,
    /// with randomized phase offsets, Y jitter, and shirt colors.
    ///
    /// Walking speed is shared: the agent starting furthest out still covers
    /// its distance within the target duration at a small safety margin.
    pub fn seed(rng: &mut impl Rng) -> Self {
        // The line leader starts furthest from the destination; size the
        // shared speed so even that agent arrives inside the target window
        let furthest_distance = WALK_START_X - WALK_DESTINATION_X;
        let speed = furthest_distance / ARRIVAL_TARGET_SECS * ARRIVAL_MARGIN;

        let agents = (0..PEDESTRIAN_COUNT)
            .map(|i| Pedestrian {
                pos: Vec2::new(
                    WALK_START_X - i as f32 * AGENT_SPACING,
                    ROAD_Y + 0.3 + rng.random_range(0.0..0.5),
                ),
                mode: PedestrianMode::WalkingOutbound,
                walk_phase: rng.random_range(0.0..1.0),
                celebration_phase: rng.random_range(0.0..1.0),
                shirt: SHIRT_PALETTE[rng.random_range(0..SHIRT_PALETTE.len())],
                speed,
            })
            .collect();
        Self { agents }
    }

    /// Advance every agent by one frame. `dt` is in seconds (for ground
    /// speed); `time_scale` drives the per-reference-frame cycle phases.
    pub fn advance(&mut self, rng: &mut impl Rng, dt: f32, time_scale: f32) {
        for agent in &mut self.agents {
            match agent.mode {
                PedestrianMode::WalkingOutbound => {
                    agent.pos.x -= agent.speed * dt;
                    agent.walk_phase += WALK_CYCLE_SPEED * time_scale;
                    if agent.walk_phase > 1.0 {
                        agent.walk_phase -= 1.0;
                    }

                    if agent.pos.x <= WALK_DESTINATION_X {
                        // Arrived: scatter to a stop position near the
                        // destination and start celebrating
                        agent.pos.x = WALK_DESTINATION_X
                            + rng.random_range(-STOP_SCATTER..STOP_SCATTER);
                        agent.pos.y = ROAD_Y + 0.3 + rng.random_range(0.0..0.8);
                        agent.mode = PedestrianMode::Celebrating;
                    }
                }
                // Nothing sets this mode yet; the arm exists so the return
                // walk heads back toward the start, not a second outbound leg
                PedestrianMode::WalkingReturn => {
                    agent.pos.x += agent.speed * dt;
                    agent.walk_phase += WALK_CYCLE_SPEED * time_scale;
                    if agent.walk_phase > 1.0 {
                        agent.walk_phase -= 1.0;
                    }

                    if agent.pos.x >= WALK_START_X {
                        agent.pos.x =
                            WALK_START_X + rng.random_range(-STOP_SCATTER..STOP_SCATTER);
                        agent.pos.y = ROAD_Y + 0.3 + rng.random_range(0.0..0.8);
                        agent.mode = PedestrianMode::Celebrating;
                    }
                }
                PedestrianMode::Celebrating => {
                    agent.celebration_phase += CELEBRATION_CYCLE_SPEED * time_scale;
                    if agent.celebration_phase > 1.0 {
                        agent.celebration_phase -= 1.0;
                    }
                }
            }
        }
    }

    pub fn agents(&self) -> &[Pedestrian] {
        &self.agents
    }
}
