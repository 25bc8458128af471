//! Calculation-specific error types.

use thiserror::Error;

/// Errors that can occur while evaluating a calculation request.
///
/// Every variant is a client error: the request is rejected before any
/// state is mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// The operation name is not one of the supported operations.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A division was requested with a zero divisor.
    #[error("Cannot perform division by zero")]
    DivisionByZero,

    /// The arithmetic overflowed to an infinite or NaN value.
    #[error("Result is not a finite number")]
    NonFiniteResult,
}
