//! Lane Crosser - A lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, integration, levels, collisions)
//! - `renderer`: Backend-agnostic drawing boundary (sprites, pavements, HUD)
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{ConfigError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed frame rate the game loop caps itself to
    pub const TICK_RATE_HZ: u32 = 60;

    /// Default screen dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 500;

    /// Pavement strips take this fraction of the screen height (top and bottom)
    pub const PAVEMENT_FRACTION: f32 = 0.1;
    /// First lane center sits at this fraction of the screen height
    pub const FIRST_LANE_FRACTION: f32 = 0.25;

    /// Height above ground that doubles the sprite size
    pub const DEPTH_SCALE: f32 = 1000.0;

    /// Score awarded for reaching the far side
    pub const LEVEL_BONUS: u64 = 10;

    /// Player defaults
    pub const PLAYER_GRAVITY: f32 = -10.0;
    pub const PLAYER_FRICTION: f32 = 0.3;
    pub const PLAYER_STEP: f32 = 5.0;
    pub const PLAYER_MAX_SPEED: f32 = 10.0;
    pub const PLAYER_JUMP_SPEED: f32 = 200.0;
    pub const PLAYER_START_X: f32 = 0.5;
    pub const PLAYER_START_Y: f32 = 0.95;

    /// Car speed = level * uniform(JITTER_MIN, JITTER_MAX), truncated, at least CAR_MIN_SPEED
    pub const CAR_SPEED_JITTER_MIN: f32 = 0.5;
    pub const CAR_SPEED_JITTER_MAX: f32 = 1.5;
    pub const CAR_MIN_SPEED: f32 = 1.0;

    /// HUD anchors (pixels)
    pub const HUD_SCORE_POS: (i32, i32) = (32, 10);
    pub const HUD_LEVEL_POS: (i32, i32) = (532, 10);
    pub const HUD_GAME_OVER_POS: (i32, i32) = (232, 10);
}
