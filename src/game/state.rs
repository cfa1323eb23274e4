use macroquad::math::{vec2, IVec2, Vec2};

use super::config::GameConfig;
use super::direction::Direction;

/// An apple waiting to be eaten. Apples are replaced, never updated: one
/// is destroyed on consumption and a fresh one is spawned elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    /// Center of the apple on the board
    pub pos: IVec2,
}

/// The snake: body segments with the head at index 0, plus the current
/// movement direction
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head at index 0, tail at the last index
    pub body: Vec<Vec2>,
    /// Current direction of movement
    pub direction: Direction,
    speed: f32,
    segment_size: f32,
}

impl Snake {
    /// Create a snake at board center: the head at `(w/2, h/2)` and each
    /// following segment one pixel further right, moving left.
    pub fn new(config: &GameConfig) -> Self {
        let head = vec2(config.board_width / 2.0, config.board_height / 2.0);
        let body = (0..config.initial_snake_length)
            .map(|i| vec2(head.x + i as f32, head.y))
            .collect();

        Self {
            body,
            direction: Direction::Left,
            speed: config.snake_speed,
            segment_size: config.segment_size,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Vec2 {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Vec2 {
        *self.body.last().unwrap()
    }

    /// One continuous-motion step: walking tail-to-head, every segment
    /// takes over its predecessor's position, then the head advances by
    /// `direction * speed * dt`.
    pub fn advance(&mut self, dt: f32) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] += self.direction.unit_vec() * self.speed * dt;
    }

    /// Discrete-step variant: same follow step, but the head jumps one
    /// whole grid cell regardless of elapsed time. Not driven by the main
    /// loop; `advance` is the canonical update.
    pub fn advance_discrete(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] += self.direction.unit_vec() * self.segment_size;
    }

    /// Overwrite the direction unconditionally. Rejecting reversals is the
    /// input handler's responsibility, keeping this type a plain state
    /// transition.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Dead if the head is strictly outside `[0, w] x [0, h]` (a head
    /// exactly on the boundary is still alive), or if the head and any
    /// other segment land on the same integer pixel.
    pub fn is_dead(&self, board_width: f32, board_height: f32) -> bool {
        let head = self.head();

        if head.x < 0.0 || head.x > board_width || head.y < 0.0 || head.y > board_height {
            return true;
        }

        let head_pixel = head.as_ivec2();
        self.body[1..].iter().any(|seg| seg.as_ivec2() == head_pixel)
    }

    /// Grow by one segment: move one step, then re-attach a copy of the
    /// tail position the step just vacated.
    pub fn extend(&mut self, dt: f32) {
        let old_tail = self.tail();
        self.advance(dt);
        self.body.push(old_tail);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state. Created at game start, mutated every frame,
/// replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apples: Vec<Apple>,
    pub score: u32,
    pub game_over: bool,
}

impl GameState {
    /// State with no apples yet; the engine spawns them on reset
    pub fn new(snake: Snake) -> Self {
        Self {
            snake,
            apples: Vec::new(),
            score: 0,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // dt values below are chosen so speed * dt is exact in f32

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(&GameConfig::small());

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), vec2(32.0, 32.0));
        assert_eq!(snake.body[1], vec2(33.0, 32.0));
        assert_eq!(snake.body[2], vec2(34.0, 32.0));
        assert_eq!(snake.direction, Direction::Left);
    }

    #[test]
    fn test_advance_chain_follow() {
        let mut snake = Snake::new(&GameConfig::small());
        snake.advance(0.25); // 40 px/s * 0.25 s = 10 px

        assert_eq!(snake.head(), vec2(22.0, 32.0));
        assert_eq!(snake.body[1], vec2(32.0, 32.0));
        assert_eq!(snake.body[2], vec2(33.0, 32.0));
    }

    #[test]
    fn test_advance_discrete_moves_one_cell() {
        let mut snake = Snake::new(&GameConfig::small());
        snake.advance_discrete();

        assert_eq!(snake.head(), vec2(27.0, 32.0));
        assert_eq!(snake.body[1], vec2(32.0, 32.0));
    }

    #[test]
    fn test_set_direction_is_unconditional() {
        let mut snake = Snake::new(&GameConfig::small());
        // The snake itself accepts even a reversal; the guard lives in the
        // input handler.
        snake.set_direction(Direction::Right);
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn test_extend_appends_old_tail() {
        let mut snake = Snake::new(&GameConfig::small());
        let old_tail = snake.tail();

        snake.extend(0.25);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), old_tail);
        // The rest of the body still moved one step
        assert_eq!(snake.head(), vec2(22.0, 32.0));
    }

    #[test]
    fn test_extend_four_times_grows_by_four() {
        let mut snake = Snake::new(&GameConfig::small());
        for _ in 0..4 {
            snake.extend(0.25);
        }
        assert_eq!(snake.len(), 7);
    }

    #[test]
    fn test_head_on_boundary_is_alive() {
        let mut snake = Snake::new(&GameConfig::small());

        snake.body[0] = vec2(0.0, 32.0);
        assert!(!snake.is_dead(64.0, 64.0));

        snake.body[0] = vec2(64.0, 32.0);
        assert!(!snake.is_dead(64.0, 64.0));

        snake.body[0] = vec2(32.0, 64.0);
        assert!(!snake.is_dead(64.0, 64.0));
    }

    #[test]
    fn test_head_beyond_boundary_is_dead() {
        let mut snake = Snake::new(&GameConfig::small());

        snake.body[0] = vec2(-0.5, 32.0);
        assert!(snake.is_dead(64.0, 64.0));

        snake.body[0] = vec2(64.5, 32.0);
        assert!(snake.is_dead(64.0, 64.0));

        snake.body[0] = vec2(32.0, -0.5);
        assert!(snake.is_dead(64.0, 64.0));

        snake.body[0] = vec2(32.0, 64.5);
        assert!(snake.is_dead(64.0, 64.0));
    }

    #[test]
    fn test_self_collision_compares_truncated_pixels() {
        let mut snake = Snake::new(&GameConfig::small());

        // Head and a body segment in the same integer pixel (5, 5)
        snake.body[0] = vec2(5.2, 5.7);
        snake.body[1] = vec2(5.9, 5.1);
        snake.body[2] = vec2(6.9, 5.1);
        assert!(snake.is_dead(64.0, 64.0));

        // One pixel apart: alive
        snake.body[1] = vec2(6.0, 5.1);
        assert!(!snake.is_dead(64.0, 64.0));
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(Snake::new(&GameConfig::small()));
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert!(state.apples.is_empty());
    }
}
