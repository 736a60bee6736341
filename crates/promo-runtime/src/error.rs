//! Runtime error types

use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Operands that cannot be compared with the given operator
    ///
    /// Contained at the leaf level during evaluation; leaves that hit this
    /// simply do not match.
    #[error("Type mismatch: cannot compare {left} and {right} with {operator}")]
    TypeMismatch {
        operator: String,
        left: &'static str,
        right: &'static str,
    },

    /// Action configured with an unusable amount
    #[error("Invalid amount for {action}: {amount}")]
    InvalidAmount { action: String, amount: f64 },

    /// Generic runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
