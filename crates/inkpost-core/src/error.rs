//! Error types for inkpost-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Inkpost operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying content.
///
/// Per-item load problems never reach callers as an `Error`; they are logged
/// and counted instead. These variants describe failures of a whole operation
/// or of a single item before it is skipped.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure tied to a specific path
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Content could not be parsed (malformed header, bad encoding, ...)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required resource does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What kind of resource was looked up
        kind: String,
        /// Identifier or path of the missing resource
        id: String,
    },

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates an I/O error carrying the path that failed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Creates a not-found error for the given identifier and resource kind.
    pub fn not_found<I: Into<String>, K: Into<String>>(id: I, kind: K) -> Self {
        Error::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Returns `true` if this error means the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_with_path_display() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            "/content/posts/a.md",
        );
        let msg = err.to_string();
        assert!(msg.contains("/content/posts/a.md"));
        assert!(msg.contains("denied"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let err = Error::not_found("content/posts", "content directory");
        assert_eq!(err.to_string(), "content directory not found: content/posts");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_not_found_kind() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "missing.md",
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_parse_and_config() {
        assert_eq!(Error::parse("bad yaml").to_string(), "Parse error: bad yaml");
        assert_eq!(
            Error::config("no dir").to_string(),
            "Configuration error: no dir"
        );
    }
}
