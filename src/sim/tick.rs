//! Per-frame simulation tick
//!
//! Update order is fixed: level check (advance and lazy generation), player,
//! current-level obstacles, then collisions. Collisions therefore always see
//! the final positions of the frame.

use rand::Rng;

use super::collision::{self, overlaps_any};
use super::obstacle::spawn_car;
use super::state::{GamePhase, GameState};

/// Extra pixels around the player the demo autopilot treats as danger
const AUTOPILOT_LOOKAHEAD: i32 = 24;

/// Keyboard snapshot for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Idle/demo mode - the game steers the player itself
    pub idle_mode: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    let input = if input.idle_mode {
        autopilot_input(state)
    } else {
        input.clone()
    };

    state.time_ticks += 1;

    check_level(state);

    let screen = state.tuning.screen;
    state.player.update(&input, screen);
    if let Some(cars) = state.obstacles.get_mut(&state.level) {
        for car in cars.iter_mut() {
            car.update(&input, screen);
        }
    }

    check_collisions(state);
}

/// Advance past a crossed top edge, then make sure the level has traffic
fn check_level(state: &mut GameState) {
    if state.player.spatial.position.y < 0.0 {
        state.player.spatial.position.y = state.tuning.screen.height_f();
        state.obstacles.clear();
        state.level += 1;
        state.score += state.tuning.level_bonus;
        log::info!("Level {} reached, score {}", state.level, state.score);
    }

    if !state.obstacles.contains_key(&state.level) {
        generate_level(state);
    }
}

/// Fill the current level with one car per lane.
///
/// Lanes start at a fixed offset and are stacked one car height apart; the
/// first candidate that would touch a pavement is discarded and ends the
/// level, so lane count depends only on geometry.
pub fn generate_level(state: &mut GameState) {
    let level = state.level;
    let screen = state.tuning.screen;
    let car_tuning = &state.tuning.car;
    let pavements = [state.top_pavement, state.bottom_pavement];

    let mut cars = Vec::new();
    let mut lane_y = screen.height_f() * state.tuning.first_lane_fraction;
    loop {
        let direction = if state.rng.random::<f32>() > 0.5 {
            -1.0
        } else {
            1.0
        };
        let x = state.rng.random_range(0..=screen.width) as f32;
        let jitter = state
            .rng
            .random_range(car_tuning.speed_jitter_min..=car_tuning.speed_jitter_max);
        let speed = direction * (level as f32 * jitter).trunc().max(car_tuning.min_speed);

        let car = spawn_car(car_tuning, state.car_ground, x, lane_y, speed);
        if overlaps_any(&car.rect, &pavements) || car.rect.top() >= screen.height as i32 {
            break;
        }
        lane_y += car.rect.h as f32;
        cars.push(car);
    }

    log::debug!("Level {}: {} lanes of traffic", level, cars.len());
    state.obstacles.insert(level, cars);
}

/// End the run if a grounded player touches a car
fn check_collisions(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    if collision::player_hit(&state.player, state.current_obstacles()) {
        state.phase = GamePhase::GameOver;
        state.player.enabled = false;
        log::info!(
            "Game over on level {} with score {}",
            state.level,
            state.score
        );
    }
}

/// Demo AI: keep walking up, hop over traffic that is about to hit
fn autopilot_input(state: &GameState) -> TickInput {
    let mut input = TickInput {
        up: true,
        ..Default::default()
    };

    let player = &state.player;
    let ready = player
        .player_control()
        .is_some_and(|control| control.can_jump());
    // Releasing while cooling on the ground rearms the jump for next tick
    if !ready || player.is_airborne() {
        return input;
    }

    let danger = player.rect.resized(
        player.rect.w + 2 * AUTOPILOT_LOOKAHEAD,
        player.rect.h + 2 * AUTOPILOT_LOOKAHEAD,
    );
    input.jump = collision::first_hit(&danger, state.current_obstacles()).is_some();
    input
}
