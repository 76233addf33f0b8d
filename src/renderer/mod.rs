//! Drawing boundary
//!
//! The simulation never touches a window, font or clock. Frames are described
//! through the [`Canvas`] trait, which a platform backend implements; the
//! in-memory [`DrawList`] records commands for headless runs and tests.

pub mod frame;
pub mod sprite;

pub use frame::{RenderOptions, draw_frame, level_text, score_text};
pub use sprite::{SpritePlacement, sprite_placement};

use crate::sim::{Rect, SpriteId};

/// 8-bit RGB color
pub type Color = (u8, u8, u8);

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = (100, 100, 100);
    pub const PAVEMENT: Color = (125, 125, 125);
    pub const DEBUG: Color = (255, 0, 0);
    pub const HUD_TEXT: Color = (0, 0, 0);
    pub const GAME_OVER: Color = (100, 0, 0);
}

/// Mirror flags applied to a sprite before blitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

/// Drawing surface provided by the platform layer
pub trait Canvas {
    /// Clear the whole surface
    fn fill(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Draw `sprite` stretched to `rect`
    fn blit(&mut self, sprite: SpriteId, rect: Rect, flip: Flip);
    /// Monospaced text with its top-left corner at `at`
    fn text(&mut self, text: &str, at: (i32, i32), color: Color);
}

/// A recorded drawing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Fill(Color),
    FillRect(Rect, Color),
    Blit {
        sprite: SpriteId,
        rect: Rect,
        flip: Flip,
    },
    Text {
        text: String,
        at: (i32, i32),
        color: Color,
    },
}

/// Canvas that records every command in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Blits of a given sprite, in draw order
    pub fn blits_of(&self, sprite: SpriteId) -> impl Iterator<Item = (&Rect, &Flip)> {
        self.commands.iter().filter_map(move |cmd| match cmd {
            DrawCommand::Blit { sprite: s, rect, flip } if *s == sprite => Some((rect, flip)),
            _ => None,
        })
    }

    /// All text lines, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn blit(&mut self, sprite: SpriteId, rect: Rect, flip: Flip) {
        self.commands.push(DrawCommand::Blit { sprite, rect, flip });
    }

    fn text(&mut self, text: &str, at: (i32, i32), color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
        });
    }
}
