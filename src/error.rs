//! Error types for jobtrack
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in jobtrack
#[derive(Debug, Error)]
pub enum JobtrackError {
    /// A required field is missing or a value could not be normalized
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// No job application with this id exists
    #[error("Job application not found: {0}")]
    NotFound(i64),

    /// The store file could not be opened, created or closed
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Copying or sharing a snapshot failed
    #[error("Export failed: {0}")]
    Export(String),

    /// SQLite error
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JobtrackError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        JobtrackError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the caller can report the error and carry on using the store.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, JobtrackError::StoreUnavailable(_))
    }
}

/// Result type alias for jobtrack operations
pub type Result<T> = std::result::Result<T, JobtrackError>;
