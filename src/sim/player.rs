//! Player steering and jump debounce

use glam::Vec3;

use super::entity::{Entity, EntityKind, GroundModel, SpriteId};
use super::spatial::SpatialState;
use super::tick::TickInput;
use crate::tuning::{ConfigError, PlayerTuning, ScreenSize};

/// Jump readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    /// Grounded with the jump key released: next press launches
    #[default]
    CanJump,
    /// Jumped; waits for a grounded release before arming again
    Cooling,
}

/// Input-driven control for the player entity
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerControl {
    pub jump: JumpState,
    /// Velocity change per tick while a direction is held
    pub step: f32,
    pub max_speed: f32,
    pub jump_speed: f32,
}

impl PlayerControl {
    pub fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self {
            jump: JumpState::CanJump,
            step: tuning.step,
            max_speed: tuning.max_speed,
            jump_speed: tuning.jump_speed,
        }
    }

    pub fn can_jump(&self) -> bool {
        self.jump == JumpState::CanJump
    }

    /// Apply held keys to the velocity.
    ///
    /// Planar velocity is nudged toward the cap and left alone on release, so
    /// the token drifts until friction stops it.
    pub fn steer(&mut self, spatial: &mut SpatialState, input: &TickInput) {
        let grounded = spatial.is_grounded();
        match self.jump {
            JumpState::CanJump if input.jump && grounded => {
                spatial.velocity.z = self.jump_speed;
                self.jump = JumpState::Cooling;
            }
            JumpState::Cooling if grounded && !input.jump => {
                self.jump = JumpState::CanJump;
            }
            _ => {}
        }

        let v = &mut spatial.velocity;
        if input.left {
            v.x = (v.x - self.step).max(-self.max_speed);
        }
        if input.right {
            v.x = (v.x + self.step).min(self.max_speed);
        }
        if input.up {
            v.y = (v.y - self.step).max(-self.max_speed);
        }
        if input.down {
            v.y = (v.y + self.step).min(self.max_speed);
        }
    }
}

/// Build the player entity at its start position
pub fn spawn_player(tuning: &PlayerTuning, screen: ScreenSize) -> Result<Entity, ConfigError> {
    let ground = GroundModel::try_from(&tuning.ground)?;
    let spatial = SpatialState::at(
        screen.width_f() * tuning.start_x,
        screen.height_f() * tuning.start_y,
    )
    .with_acceleration(Vec3::new(0.0, 0.0, tuning.gravity));

    Ok(Entity::new(
        EntityKind::Player(PlayerControl::from_tuning(tuning)),
        SpriteId::Ball,
        tuning.sprite.base_size(),
        spatial,
        ground,
    ))
}
