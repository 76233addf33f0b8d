//! Rectangle collision queries
//!
//! Collisions use the unscaled pixel rectangles; the depth scale is purely
//! visual. Height above ground is handled by the caller (airborne immunity).

use super::entity::Entity;
use super::rect::Rect;

/// Index of the first enabled entity whose rectangle overlaps `rect`
pub fn first_hit(rect: &Rect, others: &[Entity]) -> Option<usize> {
    others
        .iter()
        .position(|other| other.enabled && rect.intersects(&other.rect))
}

/// Whether `rect` overlaps any of the zones
pub fn overlaps_any(rect: &Rect, zones: &[Rect]) -> bool {
    zones.iter().any(|zone| rect.intersects(zone))
}

/// Whether a grounded `player` touches any of the `obstacles`
pub fn player_hit(player: &Entity, obstacles: &[Entity]) -> bool {
    player.enabled && !player.is_airborne() && first_hit(&player.rect, obstacles).is_some()
}
