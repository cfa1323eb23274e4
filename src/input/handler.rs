use macroquad::input::{is_key_down, KeyCode};

use crate::game::{Direction, FrameInput};

/// Held state of every key the game reads, captured once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
    pub reset: bool,
}

impl HeldKeys {
    /// Snapshot the current key-held state from the window
    pub fn poll() -> Self {
        Self {
            up: is_key_down(KeyCode::Up),
            right: is_key_down(KeyCode::Right),
            down: is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::Left),
            reset: is_key_down(KeyCode::W),
        }
    }
}

/// Turns raw key state into at most one game command per frame. The
/// no-instant-reversal rule lives here, not in the snake, so the snake
/// stays a plain state-transition type.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Resolve held keys through one else-chain: up, right, down, left,
    /// then reset. First match wins. A direction whose turn would reverse
    /// the snake fails its guard and falls through to the next candidate,
    /// so reset only fires on frames where no direction key was consumed.
    pub fn resolve(&self, held: HeldKeys, current: Direction) -> FrameInput {
        if held.up && !current.is_opposite(Direction::Up) {
            FrameInput::from(Direction::Up)
        } else if held.right && !current.is_opposite(Direction::Right) {
            FrameInput::from(Direction::Right)
        } else if held.down && !current.is_opposite(Direction::Down) {
            FrameInput::from(Direction::Down)
        } else if held.left && !current.is_opposite(Direction::Left) {
            FrameInput::from(Direction::Left)
        } else if held.reset {
            FrameInput {
                turn: None,
                reset: true,
            }
        } else {
            FrameInput::default()
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
