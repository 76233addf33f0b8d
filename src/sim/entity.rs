//! Shared entity physics
//!
//! Every moving thing in the game is an [`Entity`]: a kinematic state, a
//! ground model, and a pixel rectangle that follows the x/y position. What
//! makes a player a player or a car a car is the [`EntityKind`] behavior tag.

use glam::Vec2;

use super::obstacle;
use super::player::PlayerControl;
use super::rect::Rect;
use super::spatial::SpatialState;
use super::tick::TickInput;
use crate::tuning::{ConfigError, ScreenSize, ensure_unit};

/// How an entity interacts with the ground plane at z = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundModel {
    has_ground: bool,
    bounce: bool,
    bounciness: f32,
    friction: f32,
}

impl GroundModel {
    /// Validate and normalize ground parameters.
    ///
    /// Bouncing requires a ground; bounciness is zeroed when not bouncing, and
    /// an entity without ground gets full planar friction.
    pub fn new(
        has_ground: bool,
        bounce: bool,
        bounciness: f32,
        friction: f32,
    ) -> Result<Self, ConfigError> {
        let bounciness = ensure_unit("bounciness", bounciness)?;
        let friction = ensure_unit("friction", friction)?;

        let bounce = has_ground && bounce;
        Ok(Self {
            has_ground,
            bounce,
            bounciness: if bounce { bounciness } else { 0.0 },
            friction: if has_ground { friction } else { 1.0 },
        })
    }

    #[inline]
    pub fn has_ground(&self) -> bool {
        self.has_ground
    }

    #[inline]
    pub fn bounces(&self) -> bool {
        self.bounce
    }

    #[inline]
    pub fn bounciness(&self) -> f32 {
        self.bounciness
    }

    #[inline]
    pub fn friction(&self) -> f32 {
        self.friction
    }
}

/// Image handle owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Ball,
    Car,
}

/// Per-kind behavior
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    /// Keyboard-driven token with a debounced jump
    Player(PlayerControl),
    /// Lane traffic that wraps around the screen edges
    Obstacle,
}

impl EntityKind {
    /// Apply this tick's input before integration
    pub fn on_input(&mut self, spatial: &mut SpatialState, input: &TickInput) {
        match self {
            EntityKind::Player(control) => control.steer(spatial, input),
            EntityKind::Obstacle => {}
        }
    }

    /// React to the screen boundary after integration.
    /// Returns true when the position was changed.
    pub fn on_boundary(
        &self,
        spatial: &mut SpatialState,
        footprint: &Footprint,
        screen: ScreenSize,
    ) -> bool {
        match self {
            EntityKind::Player(_) => false,
            EntityKind::Obstacle => obstacle::wrap(spatial, footprint, screen),
        }
    }
}

/// Scaled on-screen extent of an entity for the current tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Footprint {
    pub fn left(&self) -> f32 {
        self.center.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.height / 2.0
    }
}

/// A simulated game object
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub spatial: SpatialState,
    /// Unscaled bounding box, centered on the truncated x/y position
    pub rect: Rect,
    /// Disabled entities are neither updated nor drawn
    pub enabled: bool,
    pub ground: GroundModel,
    pub kind: EntityKind,
    pub sprite: SpriteId,
}

impl Entity {
    pub fn new(
        kind: EntityKind,
        sprite: SpriteId,
        size: (i32, i32),
        spatial: SpatialState,
        ground: GroundModel,
    ) -> Self {
        let mut entity = Self {
            spatial,
            rect: Rect::new(0, 0, size.0, size.1),
            enabled: true,
            ground,
            kind,
            sprite,
        };
        entity.sync_rect();
        entity
    }

    /// Advance one tick: input, integration, boundary handling
    pub fn update(&mut self, input: &TickInput, screen: ScreenSize) {
        if !self.enabled {
            return;
        }
        self.kind.on_input(&mut self.spatial, input);
        self.integrate();

        let footprint = self.footprint();
        if self.kind.on_boundary(&mut self.spatial, &footprint, screen) {
            self.sync_rect();
        }
    }

    /// Explicit Euler step with planar friction and ground response
    pub fn integrate(&mut self) {
        let s = &mut self.spatial;
        s.velocity += s.acceleration;

        let damping = 1.0 - self.ground.friction;
        s.velocity.x *= damping;
        s.velocity.y *= damping;

        s.position += s.velocity;

        if self.ground.has_ground && s.position.z < 0.0 {
            if self.ground.bounce {
                // Reflect the penetration of this step, not just the final depth
                let b = self.ground.bounciness;
                s.position.z = b * (s.position.z - s.velocity.z);
                s.velocity.z *= -b;
            } else {
                s.position.z = 0.0;
                s.velocity.z = 0.0;
            }
        }

        self.sync_rect();
    }

    /// Re-center the rectangle on the (truncated) x/y position
    pub fn sync_rect(&mut self) {
        let p = self.spatial.position;
        self.rect.set_center(p.x as i32, p.y as i32);
    }

    pub fn is_airborne(&self) -> bool {
        self.spatial.is_airborne()
    }

    pub fn scale(&self) -> f32 {
        self.spatial.depth_scale()
    }

    pub fn footprint(&self) -> Footprint {
        let scale = self.scale();
        let (cx, cy) = self.rect.center();
        Footprint {
            center: Vec2::new(cx as f32, cy as f32),
            width: self.rect.w as f32 * scale,
            height: self.rect.h as f32 * scale,
        }
    }

    pub fn left(&self) -> f32 {
        self.footprint().left()
    }

    pub fn right(&self) -> f32 {
        self.footprint().right()
    }

    pub fn top(&self) -> f32 {
        self.footprint().top()
    }

    pub fn bottom(&self) -> f32 {
        self.footprint().bottom()
    }

    pub fn width(&self) -> f32 {
        self.footprint().width
    }

    pub fn height(&self) -> f32 {
        self.footprint().height
    }

    pub fn player_control(&self) -> Option<&PlayerControl> {
        match &self.kind {
            EntityKind::Player(control) => Some(control),
            EntityKind::Obstacle => None,
        }
    }
}
