//! Where and how an entity's sprite lands on screen

use super::Flip;
use crate::sim::{Entity, Rect};

/// Final blit rectangle and mirroring for one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpritePlacement {
    pub rect: Rect,
    pub flip: Flip,
}

/// Sprites face their direction of travel and grow with height.
///
/// Returns `None` for disabled entities and for a depth scale that would
/// collapse either dimension to zero pixels; the entity itself is untouched.
pub fn sprite_placement(entity: &Entity) -> Option<SpritePlacement> {
    if !entity.enabled {
        return None;
    }

    let velocity = entity.spatial.velocity;
    let flip = Flip {
        horizontal: velocity.x < 0.0,
        vertical: velocity.y < 0.0,
    };

    let scale = entity.scale();
    let mut rect = entity.rect;
    if scale != 1.0 {
        let w = (rect.w as f32 * scale) as i32;
        let h = (rect.h as f32 * scale) as i32;
        if w.min(h) <= 0 {
            return None;
        }
        rect = rect.resized(w, h);
    }

    Some(SpritePlacement { rect, flip })
}
