//! Error types shared across the lead router crates

use thiserror::Error;

/// Core error type
///
/// Scoring, tiering and routing are total functions and never produce one
/// of these. Errors only arise at the edges: lookups, imports and patches.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Shorthand for a missing entity
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
