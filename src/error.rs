//! Error types for snippet store operations.

use thiserror::Error;

/// Primary error type for snippet operations.
#[derive(Error, Debug)]
pub enum SnipError {
    // Storage errors
    #[error("Cannot open snippet database at {path}: {reason}")]
    OpenFailed { path: String, reason: String },

    #[error("No usable data directory on this platform")]
    DataDirUnavailable,

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    // General errors
    #[error("{0}")]
    Other(String),
}

impl SnipError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(self, Self::OpenFailed { .. } | Self::DataDirUnavailable)
    }

    /// Returns a suggestion for how to fix the error.
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::OpenFailed { .. } => Some("Check the path and its permissions, or pass --db"),
            Self::DataDirUnavailable => Some("Set SNIP_DB or pass --db to choose a location"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using SnipError.
pub type Result<T> = std::result::Result<T, SnipError>;
