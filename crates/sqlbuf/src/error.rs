//! Error types for sqlbuf

use thiserror::Error;

/// Result type alias for builder operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for statement construction
///
/// Building SQL text performs no I/O and parses nothing, so the only failure
/// is a caller handing over an argument the builder cannot use. Methods that
/// return this error leave the statement buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// Empty name, empty list, or an unusable date/time pattern
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SqlError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Reject an empty (or whitespace-only) name before anything is appended.
pub(crate) fn require_name(what: &str, name: &str) -> SqlResult<()> {
    if name.trim().is_empty() {
        return Err(SqlError::invalid_argument(format!("{what} cannot be empty")));
    }
    Ok(())
}
