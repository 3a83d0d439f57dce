//! Error types for inkpost-cli

use thiserror::Error;

/// Result type alias for inkpost-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in inkpost-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from inkpost-core
    #[error(transparent)]
    Core(#[from] inkpost_core::Error),

    /// Writing output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error means a requested item does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Core(e) if e.is_not_found())
    }
}
