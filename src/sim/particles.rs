//! Fixed-capacity particle pools: debris and firecrackers
//!
//! Pools are allocated once and reactivated by re-seeding, never reallocated.
//! A particle whose life has run out (or whose explosion has finished) is
//! inert: physics and rendering skip it until the next seed. Seed requests
//! never write past pool capacity.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Rgb;
use crate::consts::*;

/// Gravity applied to debris vertical velocity, per reference frame
const DEBRIS_GRAVITY: f32 = 0.01;
/// Debris life decay, per reference frame
const DEBRIS_FADE: f32 = 0.01;

/// A single chunk of building debris
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debris {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life fraction; 0 = inert
    pub life: f32,
    pub size: f32,
}

/// Pool of debris chunks thrown from the impact point on destruction.
///
/// Seeded exactly once per destruction event, then decays monotonically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebrisField {
    particles: Vec<Debris>,
}

impl DebrisField {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(MAX_DEBRIS),
        }
    }

    /// Fill the pool with outward, upward-biased chunks around `origin`.
    pub fn seed(&mut self, rng: &mut impl Rng, origin: Vec2) {
        self.particles.clear();
        for _ in 0..MAX_DEBRIS {
            self.particles.push(Debris {
                pos: origin + Vec2::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)),
                vel: Vec2::new(
                    rng.random_range(-1.0..1.0),
                    rng.random_range(0.1..2.1),
                ),
                life: 1.0,
                size: rng.random_range(0.2..0.7),
            });
        }
    }

    /// Advance every live chunk: constant gravity, linear fade.
    pub fn advance(&mut self, time_scale: f32) {
        for p in &mut self.particles {
            if p.life <= 0.0 {
                continue;
            }
            p.pos += p.vel * time_scale;
            p.vel.y -= DEBRIS_GRAVITY * time_scale;
            p.life = (p.life - DEBRIS_FADE * time_scale).max(0.0);
        }
    }

    /// Chunks with life remaining, for the render pass
    pub fn live(&self) -> impl Iterator<Item = &Debris> {
        self.particles.iter().filter(|p| p.life > 0.0)
    }

    /// True once every chunk has burned out (or the pool was never seeded)
    pub fn all_inert(&self) -> bool {
        self.particles.iter().all(|p| p.life <= 0.0)
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// Launch trajectory class for a firecracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrajectoryKind {
    #[default]
    StraightUp,
    AngledLeft,
    AngledRight,
}

/// The fixed celebration palette
const FIRECRACKER_PALETTE: [Rgb; 4] = [
    Rgb::new(1.0, 0.2, 0.1),
    Rgb::new(1.0, 0.9, 0.2),
    Rgb::new(0.2, 0.4, 1.0),
    Rgb::new(0.2, 1.0, 0.3),
];

/// Gravity on an unexploded firecracker, per reference frame
const FIRECRACKER_GRAVITY: f32 = 0.0008;

/// One celebration firecracker: ballistic until its travel threshold, then a
/// fixed-duration radial firework.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Firecracker {
    pub pos: Vec2,
    pub vel: Vec2,
    pub trajectory: TrajectoryKind,
    pub color: Rgb,
    /// Accumulated path length since launch
    pub traveled: f32,
    /// Path length at which this one bursts
    pub burst_distance: f32,
    pub exploded: bool,
    /// Seconds of in-animation explosion time, capped past EXPLOSION_DURATION
    pub explosion_time: f32,
}

impl Firecracker {
    /// An inert pool slot: already exploded, animation already finished
    fn finished() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            trajectory: TrajectoryKind::StraightUp,
            color: FIRECRACKER_PALETTE[0],
            traveled: 0.0,
            burst_distance: 0.0,
            exploded: true,
            explosion_time: EXPLOSION_DURATION + 0.1,
        }
    }

    /// Whether this particle's explosion animation has fully played out
    pub fn finished_exploding(&self) -> bool {
        self.exploded && self.explosion_time >= EXPLOSION_DURATION
    }
}

/// A batch of 5-7 firecrackers launched together and reseeded together once
/// every member has finished its burst.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirecrackerBurst {
    particles: Vec<Firecracker>,
}

impl FirecrackerBurst {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(MAX_FIRECRACKERS),
        }
    }

    /// Launch a fresh batch from the celebration roof. Batch size is random
    /// in 5..=7; unused pool slots are marked finished so they never block
    /// batch completion.
    pub fn seed(&mut self, rng: &mut impl Rng) {
        self.particles.clear();
        let launch = Vec2::new(LAUNCH_ROOF_X, LAUNCH_ROOF_Y);
        let batch_size = rng.random_range(5..=7).min(MAX_FIRECRACKERS);

        for _ in 0..batch_size {
            let trajectory = match rng.random_range(0..3) {
                0 => TrajectoryKind::StraightUp,
                1 => TrajectoryKind::AngledLeft,
                _ => TrajectoryKind::AngledRight,
            };
            let vel = match trajectory {
                TrajectoryKind::StraightUp => Vec2::new(0.0, rng.random_range(0.25..0.34)),
                TrajectoryKind::AngledLeft => Vec2::new(
                    -rng.random_range(0.08..0.13),
                    rng.random_range(0.22..0.29),
                ),
                TrajectoryKind::AngledRight => Vec2::new(
                    rng.random_range(0.08..0.13),
                    rng.random_range(0.22..0.29),
                ),
            };
            self.particles.push(Firecracker {
                pos: launch,
                vel,
                trajectory,
                color: FIRECRACKER_PALETTE[rng.random_range(0..FIRECRACKER_PALETTE.len())],
                traveled: 0.0,
                burst_distance: rng.random_range(8.0..12.0),
                exploded: false,
                explosion_time: 0.0,
            });
        }
        for _ in batch_size..MAX_FIRECRACKERS {
            self.particles.push(Firecracker::finished());
        }
    }

    /// Advance the batch: ballistic flight with travel accumulation for the
    /// unexploded, explosion-clock progression for the rest.
    pub fn advance(&mut self, time_scale: f32) {
        for p in &mut self.particles {
            if !p.exploded {
                let step = p.vel * time_scale;
                p.pos += step;
                p.vel.y -= FIRECRACKER_GRAVITY * time_scale;
                p.traveled += step.length();

                if p.traveled >= p.burst_distance {
                    p.exploded = true;
                    p.explosion_time = 0.0;
                }
            } else if p.explosion_time < EXPLOSION_DURATION {
                p.explosion_time += EXPLOSION_SPEED * time_scale;
            }
        }
    }

    /// All members exploded and each explosion fully animated: the batch is
    /// eligible for automatic reseed.
    pub fn all_finished(&self) -> bool {
        self.particles.iter().all(Firecracker::finished_exploding)
    }

    /// True while the pool holds a seeded batch
    pub fn is_seeded(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Firecracker] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::new(0xCAFE, 0)
    }

    #[test]
    fn test_debris_decays_to_zero_and_stays() {
        let mut field = DebrisField::new();
        field.seed(&mut rng(), Vec2::new(TARGET_ROOF_X, TARGET_ROOF_Y));
        assert!(!field.all_inert());
        assert_eq!(field.live().count(), MAX_DEBRIS);

        // Life decays at 0.01/frame: 100 frames to floor, run past it
        for _ in 0..150 {
            field.advance(1.0);
        }
        assert!(field.all_inert());
        assert_eq!(field.live().count(), 0);

        // Idempotent at the floor
        let snapshot: Vec<f32> = field.particles.iter().map(|p| p.life).collect();
        field.advance(1.0);
        for (p, prev) in field.particles.iter().zip(snapshot) {
            assert_eq!(p.life, 0.0);
            assert_eq!(p.life, prev);
        }
    }

    #[test]
    fn test_debris_life_monotonic() {
        let mut field = DebrisField::new();
        field.seed(&mut rng(), Vec2::ZERO);
        let mut prev: Vec<f32> = field.particles.iter().map(|p| p.life).collect();
        for _ in 0..120 {
            field.advance(0.7);
            for (p, last) in field.particles.iter().zip(&mut prev) {
                assert!(p.life <= *last);
                assert!(p.life >= 0.0);
                *last = p.life;
            }
        }
    }

    #[test]
    fn test_debris_upward_bias_at_seed() {
        let mut field = DebrisField::new();
        field.seed(&mut rng(), Vec2::ZERO);
        for p in field.particles.iter() {
            assert!(p.vel.y > 0.0);
        }
    }

    #[test]
    fn test_firecracker_batch_size_and_assignment() {
        let mut burst = FirecrackerBurst::new();
        burst.seed(&mut rng());
        assert_eq!(burst.particles().len(), MAX_FIRECRACKERS);

        let active = burst.particles().iter().filter(|p| !p.exploded).count();
        assert!((5..=7).contains(&active));

        for p in burst.particles().iter().filter(|p| !p.exploded) {
            // Every particle drew from the bounded option sets
            assert!(FIRECRACKER_PALETTE.contains(&p.color));
            assert!((8.0..=12.0).contains(&p.burst_distance));
            match p.trajectory {
                TrajectoryKind::StraightUp => assert_eq!(p.vel.x, 0.0),
                TrajectoryKind::AngledLeft => assert!(p.vel.x < 0.0),
                TrajectoryKind::AngledRight => assert!(p.vel.x > 0.0),
            }
            assert!(p.vel.y > 0.0);
        }
    }

    #[test]
    fn test_batch_not_finished_with_unexploded_member() {
        let mut burst = FirecrackerBurst::new();
        burst.seed(&mut rng());

        // Force every particle finished except one still in flight
        for p in burst.particles.iter_mut().skip(1) {
            p.exploded = true;
            p.explosion_time = EXPLOSION_DURATION;
        }
        burst.particles[0].exploded = false;
        assert!(!burst.all_finished());

        // An exploded member mid-animation also holds the batch open
        burst.particles[0].exploded = true;
        burst.particles[0].explosion_time = EXPLOSION_DURATION * 0.5;
        assert!(!burst.all_finished());

        burst.particles[0].explosion_time = EXPLOSION_DURATION;
        assert!(burst.all_finished());
    }

    #[test]
    fn test_batch_eventually_finishes() {
        let mut burst = FirecrackerBurst::new();
        burst.seed(&mut rng());
        // Generous bound: flight to max threshold plus full explosion clock
        for _ in 0..5000 {
            burst.advance(1.0);
            if burst.all_finished() {
                return;
            }
        }
        panic!("batch never finished");
    }
}
