use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::GridSpec;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Not necessarily inside the grid; whether an outside position is legal is
/// up to the wall policy.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the grid.
    #[must_use]
    pub fn is_within_bounds(self, grid: GridSpec) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(grid.cols())
            && self.y < i32::from(grid.rows())
    }

    /// Returns the neighbouring cell one step in `direction`, or `self` when
    /// there is no direction.
    #[must_use]
    pub fn stepped(self, direction: Option<Direction>) -> Self {
        let (dx, dy) = direction.map_or((0, 0), Direction::delta);
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Center cell of the grid, rounding down.
    #[must_use]
    pub fn center_of(grid: GridSpec) -> Self {
        Self {
            x: i32::from(grid.cols() / 2),
            y: i32::from(grid.rows() / 2),
        }
    }
}

/// Ordered snake body, head first.
///
/// The body never becomes empty: `advance` always pushes before it pops.
/// Duplicate segments are possible and are what self-collision detects.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Falls back to a single segment at the origin when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        if segments.is_empty() {
            return Self::new(Position::new(0, 0));
        }

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Moves the head to `new_head`; the tail stays in place when `grew`.
    pub fn advance(&mut self, new_head: Position, grew: bool) {
        self.body.push_front(new_head);
        if !grew {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true if `head` matches any segment behind the current head.
    ///
    /// Meant to be called after [`Snake::advance`], so index 0 is the new head
    /// itself and is never counted.
    #[must_use]
    pub fn collides_with_self(&self, head: Position) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body.front().copied().unwrap_or(Position::new(0, 0))
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
