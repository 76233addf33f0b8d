//! Lane traffic: spawning and screen wrap-around

use glam::Vec3;

use super::entity::{Entity, EntityKind, Footprint, GroundModel, SpriteId};
use super::spatial::SpatialState;
use crate::tuning::{CarTuning, ScreenSize};

/// Teleport an entity that fully left the screen to the opposite edge.
///
/// The entering edge lands exactly on the boundary it wraps to, whatever the
/// current width or scale. Returns true if the position changed.
pub fn wrap(spatial: &mut SpatialState, footprint: &Footprint, screen: ScreenSize) -> bool {
    let width = screen.width_f();
    let height = screen.height_f();
    let mut moved = false;

    if footprint.right() < 0.0 {
        spatial.position.x = width + footprint.width / 2.0;
        moved = true;
    } else if footprint.left() > width {
        spatial.position.x = -footprint.width / 2.0;
        moved = true;
    }

    if footprint.bottom() < 0.0 {
        spatial.position.y = height + footprint.height / 2.0;
        moved = true;
    } else if footprint.top() > height {
        spatial.position.y = -footprint.height / 2.0;
        moved = true;
    }

    moved
}

/// Build a car centered at (x, y) driving at `speed` along x
pub fn spawn_car(tuning: &CarTuning, ground: GroundModel, x: f32, y: f32, speed: f32) -> Entity {
    let spatial = SpatialState::at(x, y).with_velocity(Vec3::new(speed, 0.0, 0.0));
    Entity::new(
        EntityKind::Obstacle,
        SpriteId::Car,
        tuning.sprite.base_size(),
        spatial,
        ground,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::TickInput;

    fn car(x: f32, y: f32, speed: f32) -> Entity {
        let tuning = CarTuning::default();
        let ground = GroundModel::try_from(&tuning.ground).unwrap();
        spawn_car(&tuning, ground, x, y, speed)
    }

    #[test]
    fn test_wraps_left_to_right() {
        let screen = ScreenSize::default();
        // 60 wide: center -29 -> -31 puts the right edge at -1
        let mut c = car(-29.0, 200.0, -2.0);
        c.update(&TickInput::default(), screen);
        assert_eq!(c.left(), screen.width_f());
        assert_eq!(c.spatial.position.x, 830.0);
        assert_eq!(c.spatial.velocity.x, -2.0);
        assert_eq!(c.spatial.position.y, 200.0);
        assert_eq!(c.rect.center(), (830, 200));
    }

    #[test]
    fn test_touching_edge_does_not_wrap() {
        let screen = ScreenSize::default();
        // Right edge lands on exactly 0
        let mut c = car(-28.0, 200.0, -2.0);
        c.update(&TickInput::default(), screen);
        assert_eq!(c.right(), 0.0);
        assert_eq!(c.spatial.position.x, -30.0);
    }

    #[test]
    fn test_wraps_right_to_left() {
        let screen = ScreenSize::default();
        let mut c = car(829.0, 100.0, 3.0);
        c.update(&TickInput::default(), screen);
        assert_eq!(c.spatial.position.x, -30.0);
        assert_eq!(c.right(), 0.0);
        assert_eq!(c.spatial.velocity.x, 3.0);
    }

    #[test]
    fn test_vertical_wrap_is_symmetric() {
        let screen = ScreenSize::default();
        let footprint = Footprint {
            center: glam::Vec2::new(100.0, -16.0),
            width: 60.0,
            height: 30.0,
        };
        let mut s = SpatialState::at(100.0, -16.0);
        assert!(wrap(&mut s, &footprint, screen));
        assert_eq!(s.position.y, 515.0);
        assert_eq!(s.position.x, 100.0);

        let footprint = Footprint {
            center: glam::Vec2::new(100.0, 516.0),
            ..footprint
        };
        let mut s = SpatialState::at(100.0, 516.0);
        assert!(wrap(&mut s, &footprint, screen));
        assert_eq!(s.position.y, -15.0);
    }

    #[test]
    fn test_on_screen_is_untouched() {
        let footprint = Footprint {
            center: glam::Vec2::new(400.0, 250.0),
            width: 60.0,
            height: 30.0,
        };
        let mut s = SpatialState::at(400.0, 250.0);
        assert!(!wrap(&mut s, &footprint, ScreenSize::default()));
        assert_eq!(s, SpatialState::at(400.0, 250.0));
    }

    #[test]
    fn test_conveyor_loops() {
        let screen = ScreenSize::default();
        let mut c = car(400.0, 250.0, -7.0);
        for _ in 0..1000 {
            c.update(&TickInput::default(), screen);
            assert!(c.right() >= 0.0 && c.left() <= screen.width_f());
        }
    }
}
