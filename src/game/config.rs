use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the board in logical pixels
    pub board_width: f32,
    /// Height of the board in logical pixels
    pub board_height: f32,
    /// Initial number of snake segments
    pub initial_snake_length: usize,
    /// Head speed in logical pixels per second
    pub snake_speed: f32,
    /// Size of one grid cell, used by the discrete update mode
    pub segment_size: f32,
    /// Segments gained per apple eaten
    pub growth_per_apple: usize,
    /// Visual and collision radius of an apple, in logical pixels
    pub apple_radius: i32,
    /// Number of apples kept on the board
    pub apple_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 256.0,
            board_height: 256.0,
            initial_snake_length: 3,
            snake_speed: 40.0,
            segment_size: 5.0,
            growth_per_apple: 4,
            apple_radius: 6,
            apple_count: 3,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(64.0, 64.0)
    }

    /// Reject configurations that cannot run: apples spawn in the band
    /// `[apple_radius, board - apple_radius]` on each axis, so the board
    /// must be at least two radii wide and tall.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.initial_snake_length > 0,
            "snake must start with at least one segment"
        );
        ensure!(
            self.board_width >= (2 * self.apple_radius) as f32
                && self.board_height >= (2 * self.apple_radius) as f32,
            "board {}x{} is too small for apples of radius {}",
            self.board_width,
            self.board_height,
            self.apple_radius
        );
        Ok(())
    }
}
