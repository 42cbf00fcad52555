//! Per-frame choreographer
//!
//! [`tick`] is the single entry point that advances the whole scene by one
//! frame. Transition evaluation runs before the render-facing state settles,
//! so a rocket that crosses its endpoint this frame is already back at the
//! launch pad (and the hit already counted) by the time the renderer samples
//! it. Timeline writes happen only here.

use glam::Vec2;

use super::state::{CueId, SceneEvent, SceneState};
use crate::consts::*;

/// Advance the scene by one frame given the raw wall-clock delta in seconds.
pub fn tick(state: &mut SceneState, raw_dt: f32) {
    let dt = state.clock.tick(raw_dt);
    let time_scale = state.clock.time_scale();
    let elapsed = state.clock.elapsed();

    update_countdown(state, elapsed);
    evaluate_launches(state, elapsed);
    advance_rocket(state, time_scale, elapsed);
    advance_destruction(state, time_scale, elapsed);
    advance_celebration(state, time_scale);

    // Ambient motion, independent of the timeline
    state.drone.advance(time_scale);
    state.clouds.advance(time_scale);
    state.vehicles.advance(time_scale);
    state.flag.advance(time_scale);
    state.pedestrians.advance(&mut state.rng, dt, time_scale);
}

/// Countdown readout ticks 10 down to 0 over the pre-launch delay.
fn update_countdown(state: &mut SceneState, elapsed: f32) {
    let remaining = (state.tunables.missile_delay - elapsed).ceil();
    state.timeline.countdown = remaining.clamp(0.0, 10.0) as u32;
}

/// Decide whether a missile leaves the pad this frame.
fn evaluate_launches(state: &mut SceneState, elapsed: f32) {
    if state.timeline.missile_active || state.timeline.building_destroyed {
        return;
    }

    let launch_due = match state.timeline.missile_hit_count {
        0 => elapsed >= state.tunables.missile_delay,
        1 => state
            .timeline
            .first_hit_time
            .is_some_and(|hit| elapsed >= hit + state.tunables.second_missile_delay),
        _ => false,
    };

    if launch_due {
        state.timeline.missile_active = true;
        state.rocket.reset();
        state.push_event(SceneEvent::Cue(CueId::MissileLaunch));
        log::info!(
            "missile {} launched at t={elapsed:.2}",
            state.timeline.missile_hit_count + 1
        );
    }
}

/// Fly the active missile and resolve an impact the frame it lands.
fn advance_rocket(state: &mut SceneState, time_scale: f32, elapsed: f32) {
    if !state.timeline.missile_active {
        return;
    }
    if !state.rocket.advance(time_scale) {
        return;
    }

    // Impact: the rocket is back at the pad before this frame renders
    state.timeline.missile_active = false;
    state.rocket.reset();
    state.timeline.missile_hit_count += 1;
    log::info!(
        "missile hit {} at t={elapsed:.2}",
        state.timeline.missile_hit_count
    );

    match state.timeline.missile_hit_count {
        1 => state.timeline.first_hit_time = Some(elapsed),
        _ => {
            state.timeline.building_destroyed = true;
            state.timeline.building_destroyed_time = Some(elapsed);
            state.explosion_time = 0.0;
            let origin = Vec2::new(TARGET_ROOF_X, TARGET_ROOF_Y);
            state.debris.seed(&mut state.rng, origin);
            state.push_event(SceneEvent::Cue(CueId::Explosion));
        }
    }
}

/// Post-destruction effects: explosion clock, debris fall, and the delayed
/// hand-off to the celebration.
fn advance_destruction(state: &mut SceneState, time_scale: f32, elapsed: f32) {
    if !state.timeline.building_destroyed {
        return;
    }

    state.explosion_time += EXPLOSION_SPEED * time_scale;
    state.debris.advance(time_scale);

    if !state.timeline.celebration_active
        && state
            .timeline
            .building_destroyed_time
            .is_some_and(|destroyed| elapsed >= destroyed + state.tunables.firecracker_delay)
    {
        state.timeline.celebration_active = true;
        state.firecrackers.seed(&mut state.rng);
        state.push_event(SceneEvent::Cue(CueId::Celebration));
        log::info!("celebration started at t={elapsed:.2}");
    }
}

/// The firecracker loop: reseed a fresh batch as soon as the previous one has
/// fully played out, forever.
fn advance_celebration(state: &mut SceneState, time_scale: f32) {
    if !state.timeline.celebration_active {
        return;
    }
    if state.firecrackers.is_seeded() && state.firecrackers.all_finished() {
        state.firecrackers.seed(&mut state.rng);
    }
    state.firecrackers.advance(time_scale);
}
