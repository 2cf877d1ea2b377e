//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Malformed transcript lines are never errors.** They degrade to
//!   continuation lines or are dropped.
//! - **Rejected input** ([`ChatlensError::InvalidInput`]) and
//!   **empty results** ([`ChatlensError::EmptyResult`]) are reported to the
//!   user but leave the session usable.
//! - **Library users** get typed errors they can match on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input was rejected before parsing.
    ///
    /// This occurs when:
    /// - The file extension is not an accepted transcript type
    /// - The file exceeds the configured size limit
    #[error("Invalid input{}: {reason}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidInput {
        /// The offending file, if the input came from disk
        path: Option<PathBuf>,
        /// Why the input was rejected
        reason: String,
    },

    /// The export format tag is not one of the supported formats.
    #[error("Unsupported export format '{tag}'. Expected one of: {}", crate::parser::ExportFormat::all_names().join(", "))]
    UnsupportedFormat {
        /// The tag that was provided
        tag: String,
    },

    /// No messages were recognized, so there is nothing to analyze.
    #[error("No messages found. Make sure the export format matches the file.")]
    EmptyResult,

    /// A persisted snapshot could not be read or written.
    #[error("Snapshot '{key}' error: {message}")]
    Snapshot {
        /// Session key of the snapshot
        key: String,
        /// Description of what went wrong
        message: String,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid input error.
    pub fn invalid_input(reason: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatlensError::InvalidInput {
            path,
            reason: reason.into(),
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported_format(tag: impl Into<String>) -> Self {
        ChatlensError::UnsupportedFormat { tag: tag.into() }
    }

    /// Creates a snapshot error.
    pub fn snapshot(key: impl Into<String>, message: impl Into<String>) -> Self {
        ChatlensError::Snapshot {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the input was rejected before parsing.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChatlensError::InvalidInput { .. })
    }

    /// Returns `true` if the format tag was not recognized.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ChatlensError::UnsupportedFormat { .. })
    }

    /// Returns `true` if there were no messages to analyze.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, ChatlensError::EmptyResult)
    }
}

// ============================================================================
// Tests
// ============================================================================
