use macroquad::math::{vec2, Vec2};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Unit vector for this direction, with y growing downwards as on screen
    pub fn unit_vec(&self) -> Vec2 {
        match self {
            Direction::Up => vec2(0.0, -1.0),
            Direction::Down => vec2(0.0, 1.0),
            Direction::Left => vec2(-1.0, 0.0),
            Direction::Right => vec2(1.0, 0.0),
        }
    }
}

/// Player input resolved for one frame: at most one direction change, or a
/// reset. Reversal rejection has already happened by the time one of these
/// reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Direction change to apply this frame
    pub turn: Option<Direction>,
    /// Restart the game
    pub reset: bool,
}

impl From<Direction> for FrameInput {
    fn from(direction: Direction) -> Self {
        FrameInput {
            turn: Some(direction),
            reset: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(Direction::Up.unit_vec(), vec2(0.0, -1.0));
        assert_eq!(Direction::Down.unit_vec(), vec2(0.0, 1.0));
        assert_eq!(Direction::Left.unit_vec(), vec2(-1.0, 0.0));
        assert_eq!(Direction::Right.unit_vec(), vec2(1.0, 0.0));
    }

    #[test]
    fn test_frame_input_from_direction() {
        let input = FrameInput::from(Direction::Up);
        assert_eq!(input.turn, Some(Direction::Up));
        assert!(!input.reset);
    }
}
