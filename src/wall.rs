use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::GridSpec;
use crate::snake::Position;

/// Boundary behaviour for a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WallMode {
    /// Leaving one edge re-enters from the opposite edge.
    #[default]
    Wrap,
    /// Leaving the grid ends the game.
    Solid,
}

/// Result of resolving a raw next-head position against the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WallOutcome {
    Valid(Position),
    Blocked,
}

impl WallMode {
    /// Resolves `raw_head` against `grid` under this policy.
    #[must_use]
    pub fn resolve(self, raw_head: Position, grid: GridSpec) -> WallOutcome {
        match self {
            Self::Wrap => WallOutcome::Valid(Position {
                x: wrap_axis(raw_head.x, i32::from(grid.cols())),
                y: wrap_axis(raw_head.y, i32::from(grid.rows())),
            }),
            Self::Solid if raw_head.is_within_bounds(grid) => WallOutcome::Valid(raw_head),
            Self::Solid => WallOutcome::Blocked,
        }
    }
}

// Heads move one cell per tick, so only the cell just past either edge needs
// mapping.
fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    if value < 0 {
        upper_bound - 1
    } else if value >= upper_bound {
        0
    } else {
        value
    }
}
