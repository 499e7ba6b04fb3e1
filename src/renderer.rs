use std::io::Write;

use serde::Serialize;

use crate::error::AppError;
use crate::game::{DeathReason, GameObserver, GameStatus, Snapshot};
use crate::input::Direction;
use crate::snake::Position;

/// Owned, serialisable copy of one emitted frame.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FrameRecord {
    pub tick: u64,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_reason: Option<DeathReason>,
    pub score: u32,
    pub interval_ms: u64,
    pub direction: Option<Direction>,
    pub cols: u16,
    pub rows: u16,
    pub cell_size: u16,
    pub food: Position,
    pub snake: Vec<Position>,
}

impl From<&Snapshot<'_>> for FrameRecord {
    fn from(snapshot: &Snapshot<'_>) -> Self {
        Self {
            tick: snapshot.tick,
            status: snapshot.status,
            death_reason: snapshot.death_reason,
            score: snapshot.score,
            interval_ms: u64::try_from(snapshot.interval.as_millis()).unwrap_or(u64::MAX),
            direction: snapshot.direction,
            cols: snapshot.grid.cols(),
            rows: snapshot.grid.rows(),
            cell_size: snapshot.grid.cell_size(),
            food: snapshot.food,
            snake: snapshot.snake.segments().copied().collect(),
        }
    }
}

/// Writes every frame as one JSON object per line.
///
/// The observer callback cannot fail, so the first write error is kept and
/// later frames are dropped until the host collects it with
/// [`JsonLinesRenderer::finish`].
#[derive(Debug)]
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    error: Option<AppError>,
    frames: u64,
}

impl<W: Write> JsonLinesRenderer<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            error: None,
            frames: 0,
        }
    }

    /// Number of frames written successfully.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Flushes the writer and surfaces the first write error, if any.
    pub fn finish(mut self) -> Result<W, AppError> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        self.out.flush()?;
        Ok(self.out)
    }

    fn write_frame(&mut self, record: &FrameRecord) -> Result<(), AppError> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> GameObserver for JsonLinesRenderer<W> {
    fn on_frame(&mut self, snapshot: &Snapshot<'_>) {
        if self.error.is_some() {
            return;
        }

        match self.write_frame(&FrameRecord::from(snapshot)) {
            Ok(()) => self.frames += 1,
            Err(error) => {
                log::warn!("frame output failed, dropping further frames: {error}");
                self.error = Some(error);
            }
        }
    }
}
