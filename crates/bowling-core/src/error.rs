use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid roll symbol: {0}")]
    InvalidRoll(String),

    #[error("Invalid game at frame {frame} (roll {position}): {reason}")]
    Validation {
        frame: usize,
        position: usize,
        reason: ValidationError,
    },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
