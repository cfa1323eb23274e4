use macroquad::prelude::*;

use crate::game::{GameConfig, GameState};
use crate::metrics::GameMetrics;

/// Draws the logical board into the window at an integer pixel scale.
/// One snake segment is one logical pixel; apples are filled circles.
pub struct Renderer {
    scale: f32,
    apple_radius: f32,
    board_height: f32,
}

impl Renderer {
    pub fn new(config: &GameConfig, scale: f32) -> Self {
        Self {
            scale,
            apple_radius: config.apple_radius as f32,
            board_height: config.board_height,
        }
    }

    /// Clear the screen, then draw the snake, then every apple
    pub fn draw_playfield(&self, state: &GameState) {
        clear_background(BLACK);

        for seg in &state.snake.body {
            draw_rectangle(
                seg.x * self.scale,
                seg.y * self.scale,
                self.scale,
                self.scale,
                WHITE,
            );
        }

        for apple in &state.apples {
            draw_circle(
                apple.pos.x as f32 * self.scale,
                apple.pos.y as f32 * self.scale,
                self.apple_radius * self.scale,
                RED,
            );
        }
    }

    /// Game-over screen: the final score plus the session best
    pub fn draw_game_over(&self, state: &GameState, metrics: &GameMetrics) {
        clear_background(BLACK);

        let message = format!("Game over! You got {} point!", state.score);
        draw_text(
            &message,
            20.0 * self.scale,
            self.board_height / 3.0 * self.scale,
            8.0 * self.scale,
            WHITE,
        );

        let session = format!(
            "Best {}   Games {}   Time {}",
            metrics.high_score,
            metrics.games_played,
            metrics.format_last_run_time()
        );
        draw_text(
            &session,
            20.0 * self.scale,
            (self.board_height / 3.0 + 12.0) * self.scale,
            6.0 * self.scale,
            GRAY,
        );

        draw_text(
            "Hold W to restart",
            20.0 * self.scale,
            (self.board_height / 3.0 + 24.0) * self.scale,
            6.0 * self.scale,
            GRAY,
        );
    }
}
