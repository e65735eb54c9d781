//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
///
/// Move and history errors are recoverable: a rejected intent leaves the
/// session untouched and the caller decides whether to surface it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    CellOccupied { position: usize },

    #[error("game already decided")]
    AlreadyDecided,

    #[error("index {index} is out of range (must be below {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid history: {reason}")]
    InvalidHistory { reason: String },

    #[error("unrecognised intent '{input}'")]
    InvalidIntent { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for the errors a move or jump can be rejected with.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::CellOccupied { .. } | Error::AlreadyDecided | Error::IndexOutOfRange { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
