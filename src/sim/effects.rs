//! Pure time-to-visual-parameter functions
//!
//! Explosion flash, fire flicker, smoke puffs, and firework bursts carry no
//! persistent state: every visual parameter is computed from an externally
//! supplied elapsed time. The renderer calls these each frame with whatever
//! clock the owning entity exposes.

use glam::Vec2;

use crate::Rgb;
use crate::consts::EXPLOSION_DURATION;

const EXPLOSION_ORANGE: Rgb = Rgb::new(1.0, 0.6, 0.1);
const EXPLOSION_YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.3);
const EXPLOSION_CORE: Rgb = Rgb::new(1.0, 1.0, 0.5);
const SMOKE_DARK: Rgb = Rgb::new(0.2, 0.2, 0.2);

/// One concentric explosion layer
#[derive(Debug, Clone, Copy)]
pub struct FlashRing {
    pub radius: f32,
    pub color: Rgb,
}

/// The building-impact flash: concentric layers that expand linearly and
/// fade over [`EXPLOSION_DURATION`].
#[derive(Debug, Clone, Copy)]
pub struct ExplosionFlash {
    pub outer: FlashRing,
    pub inner: Option<FlashRing>,
    pub core: Option<FlashRing>,
}

impl ExplosionFlash {
    /// Sample the flash at `elapsed` seconds of in-animation time; None once
    /// the animation has played out.
    pub fn at(elapsed: f32) -> Option<Self> {
        if !(0.0..EXPLOSION_DURATION).contains(&elapsed) {
            return None;
        }
        let radius = 3.0 * elapsed;
        let fade = 1.0 - elapsed / EXPLOSION_DURATION;

        let layer = |threshold: f32, scale: f32, color: Rgb| {
            (fade > threshold).then(|| FlashRing {
                radius: radius * scale,
                color: color.scaled(fade),
            })
        };

        Some(Self {
            outer: FlashRing {
                radius,
                color: EXPLOSION_ORANGE.scaled(fade),
            },
            inner: layer(0.3, 0.6, EXPLOSION_YELLOW),
            core: layer(0.5, 0.3, EXPLOSION_CORE),
        })
    }
}

/// Dancing-flame silhouette parameters. No per-flame state: the flicker is a
/// sine of elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct FireFlame {
    pub flicker_offset: f32,
}

impl FireFlame {
    pub fn at(elapsed: f32) -> Self {
        Self {
            flicker_offset: (elapsed * 10.0).sin() * 0.1,
        }
    }
}

/// One rising smoke puff
#[derive(Debug, Clone, Copy)]
pub struct SmokePuff {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Smoke column above a burn point: puffs rise, swell, sway sinusoidally,
/// and fade, all as pure functions of elapsed time.
pub fn smoke_puffs(base: Vec2, elapsed: f32, base_radius: f32) -> [SmokePuff; 3] {
    std::array::from_fn(|i| {
        let i = i as f32;
        let alpha = (1.0 - (elapsed * 0.3 + i * 0.1)).max(0.0);
        SmokePuff {
            pos: Vec2::new(
                base.x + (elapsed * 2.0 + i).sin() * 0.3,
                base.y + elapsed * 2.0 + i * 0.5,
            ),
            radius: base_radius * (1.0 + elapsed * 0.5 + i * 0.2),
            color: SMOKE_DARK.scaled(alpha),
            alpha,
        }
    })
}

/// Number of radiating sparks on a firework
pub const FIREWORK_SPARKS: usize = 8;

/// A firecracker's radial firework: expanding, fading rings in the
/// particle's color plus eight radiating sparks.
#[derive(Debug, Clone)]
pub struct FireworkBurst {
    pub outer: FlashRing,
    pub mid: Option<FlashRing>,
    pub inner: Option<FlashRing>,
    pub core: Option<FlashRing>,
    /// Spark centers relative to the burst origin
    pub sparks: [Vec2; FIREWORK_SPARKS],
    pub spark_radius: f32,
    pub spark_color: Rgb,
}

impl FireworkBurst {
    /// Sample the firework at `elapsed` seconds of in-animation time.
    pub fn at(elapsed: f32, color: Rgb) -> Option<Self> {
        if !(0.0..EXPLOSION_DURATION).contains(&elapsed) {
            return None;
        }
        let radius = 2.0 * elapsed;
        let fade = 1.0 - elapsed / EXPLOSION_DURATION;
        if fade <= 0.0 {
            return None;
        }

        let ring = |threshold: f32, scale: f32, brighten: f32| {
            (fade > threshold).then(|| FlashRing {
                radius: radius * scale,
                color: color.scaled(brighten).scaled(fade),
            })
        };

        let spark_dist = radius * 0.6;
        let sparks = std::array::from_fn(|i| {
            let angle = i as f32 * std::f32::consts::TAU / FIREWORK_SPARKS as f32;
            Vec2::new(angle.cos(), angle.sin()) * spark_dist
        });

        Some(Self {
            outer: FlashRing {
                radius,
                color: color.scaled(fade),
            },
            mid: ring(0.2, 0.7, 1.3),
            inner: ring(0.4, 0.5, 1.5),
            core: (fade > 0.6).then(|| FlashRing {
                radius: radius * 0.3,
                color: Rgb::new(fade, fade, fade),
            }),
            sparks,
            spark_radius: 0.08 * fade,
            spark_color: color.scaled(1.2).scaled(fade),
        })
    }
}
