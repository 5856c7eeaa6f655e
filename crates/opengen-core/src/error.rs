//! Error types for opengen

use thiserror::Error;

/// Main error type for constraint and expression operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpengenError {
    /// The constraint has no closed form for the requested operation
    #[error("Unsupported operation: {constraint} does not implement {operation}")]
    Unsupported {
        constraint: &'static str,
        operation: &'static str,
    },

    /// Operand length does not match the dimension of the set
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A set was constructed with invalid defining parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A symbol has no value in the evaluation bindings
    #[error("Unbound symbol: {0}")]
    UnboundSymbol(String),
}

impl OpengenError {
    /// Creates an unsupported-operation error for the named constraint.
    pub fn unsupported(constraint: &'static str, operation: &'static str) -> Self {
        Self::Unsupported {
            constraint,
            operation,
        }
    }

    /// Returns true if this error signals a missing operation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Result type alias for opengen operations
pub type Result<T> = std::result::Result<T, OpengenError>;
