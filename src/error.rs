//! Error types for recommender operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

use crate::data::UserId;

/// Main error type for recommender operations.
///
/// Degenerate inputs (empty rating store, empty catalog) are not errors:
/// the scorers return empty score maps and the combiner returns an empty
/// recommendation list. An unknown user is the one condition that halts a
/// request and must reach the caller as a distinct variant.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::UnknownUser { user_id: 42 };
/// assert!(err.to_string().contains("unknown user"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecomendarError {
    /// User id has no rating history in the store.
    UnknownUser {
        /// The requested user id
        user_id: UserId,
    },

    /// Embedding/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension found
        actual: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::UnknownUser { user_id } => {
                write!(f, "unknown user: no ratings found for user {user_id}")
            }
            RecomendarError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            RecomendarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {}

impl From<&str> for RecomendarError {
    fn from(msg: &str) -> Self {
        RecomendarError::Other(msg.to_string())
    }
}

impl From<String> for RecomendarError {
    fn from(msg: String) -> Self {
        RecomendarError::Other(msg)
    }
}

impl RecomendarError {
    /// Create an unknown-user error.
    #[must_use]
    pub fn unknown_user(user_id: UserId) -> Self {
        Self::UnknownUser { user_id }
    }

    /// Create a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;
