//! Path-related error types.

use thiserror::Error;

/// Errors that can occur while building default candidate lists.
///
/// Resolution itself is total and never fails for a missing path; only
/// environment introspection can go wrong.
#[derive(Debug, Error)]
pub enum PathError {
    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
