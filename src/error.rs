use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for verman operations
#[derive(Error, Debug)]
pub enum VermanError {
    #[error("invalid version format: '{0}'")]
    InvalidVersionFormat(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("not a git repository: {0}")]
    NotARepository(String),

    #[error("git tag '{0}' already exists")]
    TagExists(String),

    #[error("error committing {}", .path.display())]
    Commit {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("error reading version file {}", .path.display())]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing to configuration file {}", .path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid version file {}: {reason}", .path.display())]
    InvalidRecord { path: PathBuf, reason: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in verman
pub type Result<T> = std::result::Result<T, VermanError>;

impl VermanError {
    /// Create a settings error with context
    pub fn settings(msg: impl Into<String>) -> Self {
        VermanError::Settings(msg.into())
    }

    /// Create an invalid version format error for the offending input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        VermanError::InvalidVersionFormat(input.into())
    }

    /// Create an invalid record error for a version file
    pub fn invalid_record(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        VermanError::InvalidRecord {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the error is a tag conflict rather than a general failure.
    pub fn is_conflict(&self) -> bool {
        matches!(self, VermanError::TagExists(_))
    }
}
