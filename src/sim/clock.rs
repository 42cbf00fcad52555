//! Frame-time normalization
//!
//! Everything in the simulation advances by per-reference-frame increments
//! scaled by `dt / REFERENCE_DT`, so milestones land at the same wall-clock
//! instants regardless of display refresh rate.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, REFERENCE_DT};

/// Derives a capped, normalized per-frame duration from wall-clock deltas.
///
/// A raw delta above [`MAX_FRAME_DT`] means the process stalled (window
/// hidden, debugger, ...); the reference duration is substituted so the scene
/// does not jump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameClock {
    /// Monotonic time since the timeline was (re)started, in seconds
    elapsed: f32,
    /// Last frame's normalized delta, in seconds
    dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            dt: REFERENCE_DT,
        }
    }

    /// Absorb one wall-clock delta, returning the normalized `dt`.
    ///
    /// Non-positive deltas (clock glitches) also fall back to the reference
    /// duration; `dt` is always positive and bounded.
    pub fn tick(&mut self, raw_dt: f32) -> f32 {
        let dt = if raw_dt <= 0.0 || raw_dt > MAX_FRAME_DT {
            REFERENCE_DT
        } else {
            raw_dt
        };
        self.dt = dt;
        self.elapsed += dt;
        dt
    }

    /// Seconds since the timeline was (re)started
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Last normalized frame delta
    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Multiplier applied to per-reference-frame increments this frame
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.dt / REFERENCE_DT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_accumulates_elapsed() {
        let mut clock = FrameClock::new();
        for _ in 0..60 {
            clock.tick(REFERENCE_DT);
        }
        assert!((clock.elapsed() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_stall_substitutes_reference_dt() {
        let mut clock = FrameClock::new();
        let dt = clock.tick(0.5);
        assert_eq!(dt, REFERENCE_DT);
        assert_eq!(clock.dt(), REFERENCE_DT);
    }

    #[test]
    fn test_non_positive_delta_substitutes_reference_dt() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(0.0), REFERENCE_DT);
        assert_eq!(clock.tick(-0.01), REFERENCE_DT);
        assert!(clock.dt() > 0.0);
    }

    #[test]
    fn test_time_scale_at_reference_rate_is_unity() {
        let mut clock = FrameClock::new();
        clock.tick(REFERENCE_DT);
        assert!((clock.time_scale() - 1.0).abs() < 1e-6);

        // Half frame rate doubles the scale
        clock.tick(REFERENCE_DT * 2.0);
        assert!((clock.time_scale() - 2.0).abs() < 1e-6);
    }
}
