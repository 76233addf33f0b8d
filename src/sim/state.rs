//! Game state and core simulation types

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Entity, GroundModel};
use super::player::spawn_player;
use super::rect::Rect;
use crate::tuning::{ConfigError, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Player is alive and crossing
    #[default]
    Playing,
    /// Player was hit while grounded; traffic keeps flowing
    GameOver,
}

/// Complete game state (deterministic for a given seed, tuning and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    /// Current level (1-based, only ever increases)
    pub level: u32,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Entity,
    /// Obstacles by level; only the current level is ever populated
    pub obstacles: BTreeMap<u32, Vec<Entity>>,
    /// Safe strip at the top of the screen (finish line)
    pub top_pavement: Rect,
    /// Safe strip at the bottom of the screen (start line)
    pub bottom_pavement: Rect,
    /// Validated ground model shared by every car
    pub(crate) car_ground: GroundModel,
}

impl GameState {
    /// Create a new game, rejecting invalid tuning
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;

        let player = spawn_player(&tuning.player, tuning.screen)?;
        let car_ground = GroundModel::try_from(&tuning.car.ground)?;

        let width = tuning.screen.width as i32;
        let pavement = tuning.pavement_height();
        let top_pavement = Rect::new(0, 0, width, pavement);
        let bottom_pavement = Rect::new(0, tuning.screen.height as i32 - pavement, width, pavement);

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            level: 1,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            player,
            obstacles: BTreeMap::new(),
            top_pavement,
            bottom_pavement,
            car_ground,
        })
    }

    pub fn pavements(&self) -> [Rect; 2] {
        [self.top_pavement, self.bottom_pavement]
    }

    /// Obstacles of the current level (empty until generated)
    pub fn current_obstacles(&self) -> &[Entity] {
        self.obstacles
            .get(&self.level)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new(7, Tuning::default()).unwrap();
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert!(!state.is_over());
        assert!(state.obstacles.is_empty());
        assert!(state.current_obstacles().is_empty());
        assert_eq!(state.top_pavement, Rect::new(0, 0, 800, 50));
        assert_eq!(state.bottom_pavement, Rect::new(0, 450, 800, 50));
    }

    #[test]
    fn test_player_starts_on_bottom_pavement() {
        let state = GameState::new(7, Tuning::default()).unwrap();
        assert!(state.player.rect.intersects(&state.bottom_pavement));
        assert!(state.player.enabled);
    }

    #[test]
    fn test_rejects_invalid_tuning() {
        let mut tuning = Tuning::default();
        tuning.player.ground.friction = 2.0;
        assert!(GameState::new(1, tuning).is_err());
    }
}
