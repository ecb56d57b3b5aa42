//! Unified error types for chatviz.
//!
//! This module provides a single [`ChatvizError`] enum that covers all error
//! cases in the library, plus the crate-wide [`Result`] alias.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - There are no retries and no partial results: every operation is a single
//!   local file read or a pure in-memory computation, so errors propagate
//!   straight to the process boundary
//!
//! Programming-contract violations (for example passing an empty string to
//! [`first_name`](crate::name::first_name)) are **not** represented here.
//! They panic, because they indicate a bug in the caller rather than bad
//! user input.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatviz operations.
///
/// # Example
///
/// ```rust
/// use chatviz::error::Result;
/// use chatviz::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatvizError>;

/// The error type for all chatviz operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the file the problem was found in.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatvizError {
    /// The input path does not exist or is not a readable file.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// The path that failed to resolve
        path: PathBuf,
    },

    /// The export document is structurally invalid.
    ///
    /// This occurs when:
    /// - The file is not valid JSON
    /// - The top-level `title` or `messages` key is missing
    /// - A key is present but has the wrong shape (e.g. `messages` is not
    ///   an array, or a record field has the wrong JSON type)
    #[error("malformed export{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    MalformedExport {
        /// Description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// Invalid invocation or a violated aggregation precondition.
    ///
    /// Surfaced immediately; no partial output is produced.
    #[error("{0}")]
    Usage(String),

    /// An I/O error other than a missing file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A chart could not be drawn or written.
    #[error("render error: {0}")]
    Render(String),
}

impl ChatvizError {
    /// Shorthand for a [`ChatvizError::MalformedExport`] without a path.
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        ChatvizError::MalformedExport {
            message: message.into(),
            path: None,
        }
    }

    /// Attaches a file path to a [`ChatvizError::MalformedExport`].
    ///
    /// Leaves every other variant untouched.
    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            ChatvizError::MalformedExport { message, path: None } => {
                ChatvizError::MalformedExport {
                    message,
                    path: Some(path.to_path_buf()),
                }
            }
            other => other,
        }
    }
}
