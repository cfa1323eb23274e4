use macroquad::math::{ivec2, vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::GameConfig;
use super::direction::FrameInput;
use super::geometry::point_in_rect;
use super::state::{Apple, GameState, Snake};

/// What happened during one simulation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// An apple was consumed this frame
    pub consumed: bool,
    /// The death evaluation flipped the game-over flag this frame
    pub just_died: bool,
    /// The reset key fired and the state was replaced
    pub was_reset: bool,
}

/// The game engine that handles all game logic, driven by one `frame`
/// call per rendered frame
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with a fresh entropy seed
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic engine for tests
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state: a centered snake plus a full apple set, score zero
    pub fn reset(&mut self) -> GameState {
        let mut state = GameState::new(Snake::new(&self.config));
        self.replenish_apples(&mut state);
        state
    }

    /// Execute one frame of simulation, in fixed order: apply input, move
    /// the snake, check apple consumption, replenish apples, evaluate
    /// death. While the game-over flag was set at the start of the frame
    /// only input, movement, and reset remain active.
    pub fn frame(&mut self, state: &mut GameState, input: FrameInput, dt: f32) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();
        let was_over = state.game_over;

        if input.reset {
            *state = self.reset();
            info!("game reset");
            outcome.was_reset = true;
        } else if let Some(direction) = input.turn {
            state.snake.set_direction(direction);
        }

        state.snake.advance(dt);

        if was_over {
            return outcome;
        }

        outcome.consumed = self.try_consume_apple(state, dt);
        self.replenish_apples(state);

        if state
            .snake
            .is_dead(self.config.board_width, self.config.board_height)
        {
            state.game_over = true;
            outcome.just_died = true;
            info!(score = state.score, "game over");
        }

        outcome
    }

    /// The first apple (in storage order) with any body segment inside its
    /// bounding square is eaten: the snake grows by `growth_per_apple`
    /// segments and the score goes up by one. At most one apple per frame.
    fn try_consume_apple(&mut self, state: &mut GameState, dt: f32) -> bool {
        let radius = self.config.apple_radius;
        let square = vec2((radius * 2) as f32, (radius * 2) as f32);

        for i in 0..state.apples.len() {
            let apple = state.apples[i];
            let top_left = vec2(
                (apple.pos.x - radius) as f32,
                (apple.pos.y - radius) as f32,
            );

            let hit = state
                .snake
                .body
                .iter()
                .any(|&seg| point_in_rect(top_left, square, seg));
            if !hit {
                continue;
            }

            for _ in 0..self.config.growth_per_apple {
                state.snake.extend(dt);
            }
            state.apples.remove(i);
            state.score += 1;
            debug!(score = state.score, "apple consumed");
            return true;
        }

        false
    }

    /// Top the apple set back up to the target count. Runs every frame, so
    /// the count only dips within a frame, never across a frame boundary.
    fn replenish_apples(&mut self, state: &mut GameState) {
        let radius = self.config.apple_radius;
        let max_x = self.config.board_width as i32 - radius;
        let max_y = self.config.board_height as i32 - radius;

        while state.apples.len() < self.config.apple_count {
            let pos = ivec2(
                self.rng.gen_range(radius..=max_x),
                self.rng.gen_range(radius..=max_y),
            );
            state.apples.push(Apple { pos });
        }
    }
}
