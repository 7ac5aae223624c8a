/// One of the four grid directions.
/// Punch zones carry one; the effects layer receives it with every bounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Unit step in screen space (Y-down).
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Up => "UP",
            Self::Right => "RIGHT",
            Self::Down => "DOWN",
        }
    }
}

/// Per-axis movement direction derived from the sign of a velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    None,
    Negative,
    Positive,
}

impl Facing {
    /// Zero (and NaN) map to `None`.
    pub fn of(value: f32) -> Self {
        if value < 0.0 {
            Self::Negative
        } else if value > 0.0 {
            Self::Positive
        } else {
            Self::None
        }
    }

    /// The grid direction this facing points along the horizontal axis.
    pub fn horizontal(self) -> Option<Direction> {
        match self {
            Self::None => None,
            Self::Negative => Some(Direction::Left),
            Self::Positive => Some(Direction::Right),
        }
    }

    /// The grid direction this facing points along the vertical axis (Y-down).
    pub fn vertical(self) -> Option<Direction> {
        match self {
            Self::None => None,
            Self::Negative => Some(Direction::Up),
            Self::Positive => Some(Direction::Down),
        }
    }
}

/// A sound event emitted by the physics core.
/// The numeric value maps to a game-defined sound in the audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);
