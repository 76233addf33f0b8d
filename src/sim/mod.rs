//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame steps only
//! - Seeded RNG only
//! - Fixed update order (level check, player, obstacles, collisions)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod spatial;
pub mod state;
pub mod tick;

pub use collision::{first_hit, overlaps_any};
pub use entity::{Entity, EntityKind, Footprint, GroundModel, SpriteId};
pub use player::{JumpState, PlayerControl};
pub use rect::Rect;
pub use spatial::SpatialState;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, generate_level, tick};
