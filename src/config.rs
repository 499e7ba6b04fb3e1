use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::wall::WallMode;

/// Logical grid dimensions and the cell size used by renderers.
///
/// Fixed for the lifetime of a level selection. Every dimension is at least
/// one, so sampling a cell or wrapping a coordinate always has a range to
/// work with.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct GridSpec {
    cols: u16,
    rows: u16,
    cell_size: u16,
}

impl GridSpec {
    /// Builds a grid; zero sizes are raised to one.
    #[must_use]
    pub const fn new(cols: u16, rows: u16, cell_size: u16) -> Self {
        Self {
            cols: at_least_one(cols),
            rows: at_least_one(rows),
            cell_size: at_least_one(cell_size),
        }
    }

    #[must_use]
    pub const fn cols(self) -> u16 {
        self.cols
    }

    #[must_use]
    pub const fn rows(self) -> u16 {
        self.rows
    }

    #[must_use]
    pub const fn cell_size(self) -> u16 {
        self.cell_size
    }
}

const fn at_least_one(value: u16) -> u16 {
    if value == 0 { 1 } else { value }
}

/// Tick interval curve in milliseconds.
///
/// `interval(score) = min(max_ms, start_ms + score * step_ms)`; a higher
/// score means a longer interval.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct TempoConfig {
    pub start_ms: u64,
    pub max_ms: u64,
    pub step_ms: u64,
}

impl TempoConfig {
    #[must_use]
    pub const fn new(start_ms: u64, max_ms: u64, step_ms: u64) -> Self {
        Self {
            start_ms,
            max_ms,
            step_ms,
        }
    }
}

/// Named level rows selectable at session start.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Classic,
    Dense,
    Wide,
}

impl Level {
    /// All levels in selector order.
    pub const ALL: [Level; 3] = [Level::Classic, Level::Dense, Level::Wide];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Dense => "dense",
            Self::Wide => "wide",
        }
    }

    #[must_use]
    pub fn grid(self) -> GridSpec {
        match self {
            Self::Classic => GridSpec::new(20, 20, 20),
            Self::Dense => GridSpec::new(25, 25, 16),
            Self::Wide => GridSpec::new(30, 15, 20),
        }
    }

    #[must_use]
    pub fn tempo(self) -> TempoConfig {
        match self {
            Self::Classic => TempoConfig::new(80, 220, 10),
            Self::Dense => TempoConfig::new(60, 200, 8),
            Self::Wide => TempoConfig::new(90, 260, 12),
        }
    }
}

/// Everything read once at session configuration time.
///
/// Immutable during a run; changing it goes through
/// [`GameEngine::reconfigure`](crate::game::GameEngine::reconfigure), which
/// starts a fresh run.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct SessionConfig {
    pub grid: GridSpec,
    pub tempo: TempoConfig,
    pub wall_mode: WallMode,
    /// Start moving right immediately instead of waiting for the first input.
    pub auto_start: bool,
}

impl SessionConfig {
    /// Builds a session from one row of the level table.
    #[must_use]
    pub fn for_level(level: Level, wall_mode: WallMode) -> Self {
        Self {
            grid: level.grid(),
            tempo: level.tempo(),
            wall_mode,
            auto_start: false,
        }
    }

    #[must_use]
    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::for_level(Level::default(), WallMode::default())
    }
}

/// Maximum random samples drawn when looking for a free food cell.
pub const FOOD_SPAWN_ATTEMPTS: u32 = 1000;

/// Upper bound on ticks simulated by the headless runner unless overridden.
pub const DEFAULT_MAX_TICKS: u64 = 10_000;
