//! Data-driven game balance
//!
//! Every number the simulation reads lives here so it can be tweaked from a
//! JSON file without recompiling. Missing fields fall back to the defaults in
//! [`crate::consts`]. Values are validated up front; nothing is clamped.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::*;
use crate::sim::GroundModel;

/// Rejected configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} range is inverted: {min} > {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("sprite `{name}` has an empty footprint ({width}x{height})")]
    EmptySprite {
        name: &'static str,
        width: i32,
        height: i32,
    },

    #[error("screen {width}x{height} cannot hold pavements of fraction {fraction}")]
    ScreenTooSmall {
        width: u32,
        height: u32,
        fraction: f32,
    },

    #[error("Failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

pub(crate) fn ensure_unit(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    let value = ensure_finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl ScreenSize {
    #[inline]
    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f(&self) -> f32 {
        self.height as f32
    }
}

/// Source image size and the uniform scale applied when it is loaded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSpec {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
}

impl SpriteSpec {
    /// Footprint in pixels after the load-time scale
    pub fn base_size(&self) -> (i32, i32) {
        (
            (self.width as f32 * self.scale) as i32,
            (self.height as f32 * self.scale) as i32,
        )
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        ensure_finite("sprite.scale", self.scale)?;
        let (width, height) = self.base_size();
        if width <= 0 || height <= 0 {
            return Err(ConfigError::EmptySprite {
                name,
                width,
                height,
            });
        }
        Ok(())
    }
}

/// Raw ground parameters as written in a tuning file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundSpec {
    pub has_ground: bool,
    pub bounce: bool,
    pub bounciness: f32,
    pub friction: f32,
}

const PLAYER_SPRITE: SpriteSpec = SpriteSpec {
    width: 64,
    height: 64,
    scale: 0.5,
};

const PLAYER_GROUND: GroundSpec = GroundSpec {
    has_ground: true,
    bounce: false,
    bounciness: 1.0,
    friction: PLAYER_FRICTION,
};

const CAR_SPRITE: SpriteSpec = SpriteSpec {
    width: 120,
    height: 60,
    scale: 0.5,
};

const CAR_GROUND: GroundSpec = GroundSpec {
    has_ground: true,
    bounce: true,
    bounciness: 1.0,
    friction: 0.0,
};

/// Sprite entry as written in a file; absent fields keep the kind's default
#[derive(Deserialize)]
struct SpritePatch {
    width: Option<u32>,
    height: Option<u32>,
    scale: Option<f32>,
}

impl SpritePatch {
    fn over(self, base: SpriteSpec) -> SpriteSpec {
        SpriteSpec {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            scale: self.scale.unwrap_or(base.scale),
        }
    }
}

/// Ground entry as written in a file; absent fields keep the kind's default
#[derive(Deserialize)]
struct GroundPatch {
    has_ground: Option<bool>,
    bounce: Option<bool>,
    bounciness: Option<f32>,
    friction: Option<f32>,
}

impl GroundPatch {
    fn over(self, base: GroundSpec) -> GroundSpec {
        GroundSpec {
            has_ground: self.has_ground.unwrap_or(base.has_ground),
            bounce: self.bounce.unwrap_or(base.bounce),
            bounciness: self.bounciness.unwrap_or(base.bounciness),
            friction: self.friction.unwrap_or(base.friction),
        }
    }
}

fn player_sprite<'de, D: Deserializer<'de>>(d: D) -> Result<SpriteSpec, D::Error> {
    SpritePatch::deserialize(d).map(|patch| patch.over(PLAYER_SPRITE))
}

fn player_ground<'de, D: Deserializer<'de>>(d: D) -> Result<GroundSpec, D::Error> {
    GroundPatch::deserialize(d).map(|patch| patch.over(PLAYER_GROUND))
}

fn car_sprite<'de, D: Deserializer<'de>>(d: D) -> Result<SpriteSpec, D::Error> {
    SpritePatch::deserialize(d).map(|patch| patch.over(CAR_SPRITE))
}

fn car_ground<'de, D: Deserializer<'de>>(d: D) -> Result<GroundSpec, D::Error> {
    GroundPatch::deserialize(d).map(|patch| patch.over(CAR_GROUND))
}

impl TryFrom<&GroundSpec> for GroundModel {
    type Error = ConfigError;

    fn try_from(spec: &GroundSpec) -> Result<Self, Self::Error> {
        GroundModel::new(spec.has_ground, spec.bounce, spec.bounciness, spec.friction)
    }
}

/// Player balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    #[serde(deserialize_with = "player_sprite")]
    pub sprite: SpriteSpec,
    #[serde(deserialize_with = "player_ground")]
    pub ground: GroundSpec,
    /// Constant acceleration on z
    pub gravity: f32,
    /// Velocity change per tick while a direction is held
    pub step: f32,
    /// Planar speed cap per axis
    pub max_speed: f32,
    /// Upward z velocity applied by a jump
    pub jump_speed: f32,
    /// Start position as fractions of the screen size
    pub start_x: f32,
    pub start_y: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            sprite: PLAYER_SPRITE,
            ground: PLAYER_GROUND,
            gravity: PLAYER_GRAVITY,
            step: PLAYER_STEP,
            max_speed: PLAYER_MAX_SPEED,
            jump_speed: PLAYER_JUMP_SPEED,
            start_x: PLAYER_START_X,
            start_y: PLAYER_START_Y,
        }
    }
}

/// Car (obstacle) balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarTuning {
    #[serde(deserialize_with = "car_sprite")]
    pub sprite: SpriteSpec,
    #[serde(deserialize_with = "car_ground")]
    pub ground: GroundSpec,
    pub speed_jitter_min: f32,
    pub speed_jitter_max: f32,
    pub min_speed: f32,
}

impl Default for CarTuning {
    fn default() -> Self {
        Self {
            sprite: CAR_SPRITE,
            ground: CAR_GROUND,
            speed_jitter_min: CAR_SPEED_JITTER_MIN,
            speed_jitter_max: CAR_SPEED_JITTER_MAX,
            min_speed: CAR_MIN_SPEED,
        }
    }
}

/// Complete tuning set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen: ScreenSize,
    pub pavement_fraction: f32,
    pub first_lane_fraction: f32,
    pub level_bonus: u64,
    pub player: PlayerTuning,
    pub car: CarTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen: ScreenSize::default(),
            pavement_fraction: PAVEMENT_FRACTION,
            first_lane_fraction: FIRST_LANE_FRACTION,
            level_bonus: LEVEL_BONUS,
            player: PlayerTuning::default(),
            car: CarTuning::default(),
        }
    }
}

impl Tuning {
    /// Pavement strip height in pixels
    pub fn pavement_height(&self) -> i32 {
        (self.screen.height as f32 * self.pavement_fraction) as i32
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fraction = ensure_unit("pavement_fraction", self.pavement_fraction)?;
        if self.screen.width == 0 || self.pavement_height() <= 0 || fraction >= 0.5 {
            return Err(ConfigError::ScreenTooSmall {
                width: self.screen.width,
                height: self.screen.height,
                fraction,
            });
        }
        ensure_unit("first_lane_fraction", self.first_lane_fraction)?;

        let player = &self.player;
        player.sprite.validate("player")?;
        GroundModel::try_from(&player.ground)?;
        ensure_finite("player.gravity", player.gravity)?;
        ensure_finite("player.step", player.step)?;
        ensure_finite("player.max_speed", player.max_speed)?;
        ensure_finite("player.jump_speed", player.jump_speed)?;
        ensure_unit("player.start_x", player.start_x)?;
        ensure_unit("player.start_y", player.start_y)?;

        let car = &self.car;
        car.sprite.validate("car")?;
        GroundModel::try_from(&car.ground)?;
        let min = ensure_finite("car.speed_jitter_min", car.speed_jitter_min)?;
        let max = ensure_finite("car.speed_jitter_max", car.speed_jitter_max)?;
        if min > max {
            return Err(ConfigError::InvertedRange {
                field: "car.speed_jitter",
                min,
                max,
            });
        }
        ensure_finite("car.min_speed", car.min_speed)?;

        Ok(())
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a JSON tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Rejected tuning {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.pavement_height(), 50);
        assert_eq!(tuning.car.sprite.base_size(), (60, 30));
        assert_eq!(tuning.player.sprite.base_size(), (32, 32));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "level_bonus": 25, "player": { "jump_speed": 150.0 } }"#)
            .expect("valid tuning");
        assert_eq!(tuning.level_bonus, 25);
        assert_eq!(tuning.player.jump_speed, 150.0);
        assert_eq!(tuning.player.max_speed, PLAYER_MAX_SPEED);
        assert_eq!(tuning.screen, ScreenSize::default());
    }

    #[test]
    fn test_partial_ground_keeps_player_defaults() {
        let tuning = Tuning::from_json(r#"{ "player": { "ground": { "friction": 0.5 } } }"#)
            .expect("valid tuning");
        let ground = tuning.player.ground;
        assert_eq!(ground.friction, 0.5);
        assert!(ground.has_ground);
        assert!(!ground.bounce);
        assert_eq!(tuning.car.ground, CarTuning::default().ground);
    }

    #[test]
    fn test_partial_ground_keeps_car_defaults() {
        let tuning = Tuning::from_json(r#"{ "car": { "ground": { "bounciness": 0.4 } } }"#)
            .expect("valid tuning");
        let ground = tuning.car.ground;
        assert_eq!(ground.bounciness, 0.4);
        assert!(ground.bounce);
        assert_eq!(ground.friction, 0.0);
    }

    #[test]
    fn test_partial_sprite_keeps_kind_size() {
        let tuning = Tuning::from_json(r#"{ "car": { "sprite": { "scale": 0.25 } } }"#)
            .expect("valid tuning");
        assert_eq!(tuning.car.sprite.width, 120);
        assert_eq!(tuning.car.sprite.height, 60);
        assert_eq!(tuning.car.sprite.base_size(), (30, 15));
        assert_eq!(tuning.player.sprite.base_size(), (32, 32));
    }

    #[test]
    fn test_rejects_negative_friction() {
        let json = r#"{ "player": { "ground": { "friction": -0.1 } } }"#;
        let err = Tuning::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfUnitRange {
                field: "friction",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_excess_bounciness() {
        let mut tuning = Tuning::default();
        tuning.car.ground.bounciness = 1.5;
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::OutOfUnitRange {
                field: "bounciness",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_sprite() {
        let mut tuning = Tuning::default();
        tuning.car.sprite.scale = 0.0;
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::EmptySprite { name: "car", .. })
        ));
    }

    #[test]
    fn test_rejects_tiny_screen() {
        let mut tuning = Tuning::default();
        tuning.screen.height = 5;
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::ScreenTooSmall { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default(Some(Path::new("/nonexistent/lane-crosser.json")));
        assert_eq!(tuning.level_bonus, LEVEL_BONUS);
    }
}
