//! Full-frame composition: background, pavements, traffic, player, HUD

use super::sprite::sprite_placement;
use super::{Canvas, colors};
use crate::consts::{HUD_GAME_OVER_POS, HUD_LEVEL_POS, HUD_SCORE_POS};
use crate::sim::{Entity, GameState};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Paint each sprite's blit rectangle underneath it
    pub debug_rects: bool,
}

pub fn score_text(score: u64) -> String {
    format!("Score: {score:07}")
}

pub fn level_text(level: u32) -> String {
    format!("Level: {level:07}")
}

fn draw_entity(canvas: &mut impl Canvas, entity: &Entity, options: RenderOptions) {
    let Some(placement) = sprite_placement(entity) else {
        return;
    };
    if options.debug_rects {
        canvas.fill_rect(placement.rect, colors::DEBUG);
    }
    canvas.blit(entity.sprite, placement.rect, placement.flip);
}

/// Draw one frame of `state`
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas, options: RenderOptions) {
    canvas.fill(colors::BACKGROUND);
    for pavement in state.pavements() {
        canvas.fill_rect(pavement, colors::PAVEMENT);
    }

    for car in state.current_obstacles() {
        draw_entity(canvas, car, options);
    }
    draw_entity(canvas, &state.player, options);

    canvas.text(&score_text(state.score), HUD_SCORE_POS, colors::HUD_TEXT);
    canvas.text(&level_text(state.level), HUD_LEVEL_POS, colors::HUD_TEXT);
    if state.is_over() {
        canvas.text("Game Over!", HUD_GAME_OVER_POS, colors::GAME_OVER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::obstacle::spawn_car;
    use crate::sim::{SpriteId, TickInput, tick};
    use crate::tuning::Tuning;

    fn game() -> GameState {
        let mut state = GameState::new(2024, Tuning::default()).unwrap();
        tick(&mut state, &TickInput::default());
        state
    }

    #[test]
    fn test_hud_formatting() {
        assert_eq!(score_text(0), "Score: 0000000");
        assert_eq!(score_text(120), "Score: 0000120");
        assert_eq!(level_text(3), "Level: 0000003");
    }

    #[test]
    fn test_draw_order() {
        let state = game();
        let mut list = DrawList::new();
        draw_frame(&state, &mut list, RenderOptions::default());

        assert_eq!(list.commands[0], DrawCommand::Fill(colors::BACKGROUND));
        assert_eq!(
            list.commands[1],
            DrawCommand::FillRect(state.top_pavement, colors::PAVEMENT)
        );
        assert_eq!(
            list.commands[2],
            DrawCommand::FillRect(state.bottom_pavement, colors::PAVEMENT)
        );
        let cars = state.current_obstacles().len();
        assert_eq!(list.blits_of(SpriteId::Car).count(), cars);
        assert_eq!(list.blits_of(SpriteId::Ball).count(), 1);
        // Player drawn last among sprites
        assert!(matches!(
            list.commands[3 + cars],
            DrawCommand::Blit {
                sprite: SpriteId::Ball,
                ..
            }
        ));
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(texts, ["Score: 0000000", "Level: 0000001"]);
    }

    #[test]
    fn test_debug_rects() {
        let state = game();
        let mut list = DrawList::new();
        draw_frame(&state, &mut list, RenderOptions { debug_rects: true });
        let debug = list
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillRect(_, c) if *c == colors::DEBUG))
            .count();
        assert_eq!(debug, state.current_obstacles().len() + 1);
    }

    #[test]
    fn test_game_over_hides_player() {
        let mut state = game();
        let (x, y) = state.player.rect.center();
        let car = spawn_car(&state.tuning.car, state.car_ground, x as f32, y as f32, 0.0);
        state.obstacles.insert(state.level, vec![car]);
        tick(&mut state, &TickInput::default());
        assert!(state.is_over());

        let mut list = DrawList::new();
        draw_frame(&state, &mut list, RenderOptions::default());
        assert_eq!(list.blits_of(SpriteId::Ball).count(), 0);
        assert_eq!(list.blits_of(SpriteId::Car).count(), 1);
        assert!(list.texts().any(|t| t == "Game Over!"));
        assert!(list.texts().any(|t| t == "Score: 0000000"));
    }
}
