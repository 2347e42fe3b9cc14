//! Error taxonomy
//!
//! Collisions are not errors: they are the Alive -> Dead transition and live
//! entirely in the simulation. What remains is startup configuration and
//! display I/O, both fatal to whatever is running at the time.

use thiserror::Error;

/// Failure reported by a display collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("display write failed: {message}")]
pub struct DisplayError {
    pub message: String,
}

impl DisplayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Settings that cannot produce a playable grid or timer.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Snake body that breaks the alive-snake invariants
    #[error("invalid snake: {0}")]
    InvalidSnake(String),
    #[error("failed to parse settings: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    /// Draw or present failed; the current tick is abandoned.
    #[error(transparent)]
    Render(#[from] DisplayError),
}

pub type Result<T> = std::result::Result<T, Error>;
