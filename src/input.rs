use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical movement directions for snake input.
///
/// A snake that has not started moving has no direction; the engine models
/// that as `Option<Direction>::None`, whose delta is the zero vector.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The single axis a direction moves along.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Unit step in grid coordinates; `y` grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Axis lock: a new direction must move along the other axis.
///
/// Rejects 180° reversals and same-axis repeats alike. Anything is accepted
/// while the snake is not moving yet.
#[must_use]
pub fn direction_change_is_valid(current: Option<Direction>, next: Direction) -> bool {
    current.is_none_or(|current| current.axis() != next.axis())
}

/// Failure to read a scripted input stream.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ScriptError {
    #[error("unexpected move {found:?} at position {index}, expected one of U D L R .")]
    UnknownMove { index: usize, found: char },
}

/// Parses a move script into one optional proposal per tick.
///
/// `U`, `D`, `L`, `R` (any case) propose a direction, `.` means no input for
/// that tick. Whitespace is ignored so long scripts can be wrapped.
pub fn parse_script(script: &str) -> Result<Vec<Option<Direction>>, ScriptError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(index, ch)| match ch.to_ascii_uppercase() {
            'U' => Ok(Some(Direction::Up)),
            'D' => Ok(Some(Direction::Down)),
            'L' => Ok(Some(Direction::Left)),
            'R' => Ok(Some(Direction::Right)),
            '.' => Ok(None),
            _ => Err(ScriptError::UnknownMove { index, found: ch }),
        })
        .collect()
}
