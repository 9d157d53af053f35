//! Error types for tejer operations.
//!
//! The taxonomy is shape-centric: every fallible operation fails because
//! two shapes disagree or because an operation needs at least one element.
//! Chain-compatibility between layers is not represented here at all — it
//! is a type-level property checked by the compiler (see
//! [`crate::nn::Network::then`]).

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TejerError>;

/// Main error type for tejer operations.
///
/// # Examples
///
/// ```
/// use tejer::error::TejerError;
///
/// let err = TejerError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TejerError {
    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation requires at least one element.
    EmptyMatrix {
        /// Name of the operation that was attempted
        op: &'static str,
    },
}

impl fmt::Display for TejerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TejerError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            TejerError::EmptyMatrix { op } => {
                write!(f, "Cannot compute {op} of an empty matrix")
            }
        }
    }
}

impl std::error::Error for TejerError {}

impl TejerError {
    /// Create a dimension mismatch error from two (rows, cols) shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}
