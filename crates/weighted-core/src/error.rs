//! Error types for weighted-sum computations
//!
//! Provides the error type shared by every weighted-sum crate.

use thiserror::Error;

/// Core error type for weighted-sum operations
#[derive(Error, Debug)]
pub enum Error {
    /// Two operands that must have equal length do not
    #[error("Length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// A matrix is ragged, or its row length disagrees with another operand
    #[error("Shape mismatch in {context}: expected {expected} columns, got {actual}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for operands of unequal length
    pub fn length_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        Self::LengthMismatch {
            expected,
            actual,
            context: context.into(),
        }
    }

    /// Create an error for a row or header count that disagrees with the matrix width
    pub fn shape_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected,
            actual,
            context: context.into(),
        }
    }
}
