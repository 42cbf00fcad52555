//! Headless scene runner
//!
//! Drives the choreography in real time without a renderer, logging timeline
//! beats and audio cues as they happen. Useful for schedule inspection:
//!
//! ```text
//! city-vignette [SECONDS] [--seed N] [--tunables PATH]
//! ```
//!
//! With no SECONDS argument the runner loops forever.

use std::path::PathBuf;
use std::time::Instant;

use city_vignette::{CueId, SceneEvent, SceneState, Tunables, sim::tick};

struct Args {
    run_secs: Option<f32>,
    seed: u64,
    tunables: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        run_secs: None,
        seed: 0,
        tunables: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                args.seed = value
                    .parse()
                    .map_err(|e| format!("invalid seed {value:?}: {e}"))?;
            }
            "--tunables" => {
                let value = iter.next().ok_or("--tunables requires a path")?;
                args.tunables = Some(PathBuf::from(value));
            }
            other => {
                let secs: f32 = other
                    .parse()
                    .map_err(|e| format!("invalid duration {other:?}: {e}"))?;
                args.run_secs = Some(secs);
            }
        }
    }
    Ok(args)
}

fn cue_name(id: CueId) -> &'static str {
    match id {
        CueId::MissileLaunch => "missile-launch",
        CueId::Explosion => "explosion",
        CueId::Celebration => "celebration",
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: city-vignette [SECONDS] [--seed N] [--tunables PATH]");
            std::process::exit(2);
        }
    };

    let tunables = match &args.tunables {
        Some(path) => Tunables::load(path),
        None => Tunables::default(),
    };
    let mut state = SceneState::with_tunables(args.seed, tunables);
    log::info!("scene started (seed {})", args.seed);

    let mut last = Instant::now();
    loop {
        let now = Instant::now();
        let raw_dt = now.duration_since(last).as_secs_f32();
        last = now;

        tick(&mut state, raw_dt);
        for event in state.drain_events() {
            match event {
                SceneEvent::Cue(id) => {
                    log::info!(
                        "cue {} at t={:.2} (countdown {}, hits {})",
                        cue_name(id),
                        state.clock.elapsed(),
                        state.timeline.countdown,
                        state.timeline.missile_hit_count,
                    );
                }
            }
        }

        if let Some(run_secs) = args.run_secs
            && state.clock.elapsed() >= run_secs
        {
            log::info!(
                "finished after {:.2}s: hits {}, destroyed {}, celebrating {}",
                state.clock.elapsed(),
                state.timeline.missile_hit_count,
                state.timeline.building_destroyed,
                state.timeline.celebration_active,
            );
            break;
        }

        // ~60 FPS pacing; the clock normalizes any jitter
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
}
