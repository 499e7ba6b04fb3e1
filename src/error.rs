use std::io;

use thiserror::Error;

use crate::input::ScriptError;

/// Failures of the headless host; the simulation itself has none.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid move script: {0}")]
    Script(#[from] ScriptError),
    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode frame: {0}")]
    Json(#[from] serde_json::Error),
}
