//! Lane Crosser entry point
//!
//! Runs a headless demo session: the autopilot plays until it is hit or the
//! tick budget runs out, every frame is composed into a draw list, and the
//! result is reported. A windowed backend only needs to implement `Canvas`
//! and feed keyboard state into `TickInput`.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use lane_crosser::consts::TICK_RATE_HZ;
use lane_crosser::renderer::{DrawList, RenderOptions, draw_frame};
use lane_crosser::sim::{GameState, TickInput, tick};
use lane_crosser::{ConfigError, Tuning};

/// Two minutes of play at the fixed frame rate
const DEMO_TICKS: u64 = 120 * TICK_RATE_HZ as u64;

fn seed_from_env() -> u64 {
    std::env::var("LANE_CROSSER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        })
}

fn run() -> Result<(), ConfigError> {
    let tuning_path = std::env::var_os("LANE_CROSSER_TUNING").map(PathBuf::from);
    let tuning = Tuning::load_or_default(tuning_path.as_deref());
    let seed = seed_from_env();

    let mut state = GameState::new(seed, tuning)?;
    log::info!("Started new game with seed: {}", seed);

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let options = RenderOptions::default();
    let mut frame = DrawList::new();
    let mut last_level = state.level;

    while state.time_ticks < DEMO_TICKS && !state.is_over() {
        tick(&mut state, &input);

        frame.clear();
        draw_frame(&state, &mut frame, options);

        if state.level != last_level {
            log::debug!(
                "Tick {}: level {} ({} draw commands)",
                state.time_ticks,
                state.level,
                frame.len()
            );
            last_level = state.level;
        }
    }

    let seconds = state.time_ticks as f32 / TICK_RATE_HZ as f32;
    println!(
        "seed {}: level {}, score {}, {:.1}s{}",
        seed,
        state.level,
        state.score,
        seconds,
        if state.is_over() { ", game over" } else { "" }
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Lane Crosser (headless demo) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
