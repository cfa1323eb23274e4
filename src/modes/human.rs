use macroquad::time::get_frame_time;
use macroquad::window::next_frame;
use tracing::info;

use crate::game::{FrameOutcome, GameConfig, GameEngine, GameState};
use crate::input::{HeldKeys, InputHandler};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-controlled play in a macroquad window
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    input_handler: InputHandler,
    renderer: Renderer,
}

impl HumanMode {
    pub fn new(config: GameConfig, scale: f32) -> Self {
        let renderer = Renderer::new(&config, scale);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            input_handler: InputHandler::new(),
            renderer,
        }
    }

    /// One iteration per rendered frame until the window is closed
    pub async fn run(&mut self) {
        info!(
            board_width = self.engine.config().board_width,
            board_height = self.engine.config().board_height,
            "session started"
        );

        loop {
            let show_game_over = self.update(HeldKeys::poll(), get_frame_time());
            self.draw(show_game_over);
            next_frame().await;
        }
    }

    /// Resolve input, run one simulation frame, and feed the metrics.
    /// Returns whether this frame shows the game-over screen: the flag is
    /// read before the simulation step, so the playfield is still drawn on
    /// the frame death happens and the game-over screen takes over on the
    /// next one.
    fn update(&mut self, held: HeldKeys, dt: f32) -> bool {
        let was_over = self.state.game_over;
        let input = self.input_handler.resolve(held, self.state.snake.direction);

        let outcome = self.engine.frame(&mut self.state, input, dt);
        self.track(outcome);

        was_over
    }

    fn track(&mut self, outcome: FrameOutcome) {
        if outcome.was_reset {
            self.metrics.on_game_start();
        }
        if outcome.just_died {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn draw(&self, show_game_over: bool) {
        if show_game_over {
            self.renderer.draw_game_over(&self.state, &self.metrics);
        } else {
            self.renderer.draw_playfield(&self.state);
        }
    }
}
