//! Request and result types for calculations.

use serde::{Deserialize, Serialize};

use super::operation::Operation;

/// A calculation request as received from a client.
///
/// The operation name is kept as a raw string so that unsupported names
/// can be echoed back in the rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub a: f64,
    pub b: f64,
    pub operation: String,
}

impl CalculationRequest {
    pub fn new(a: f64, b: f64, operation: impl Into<String>) -> Self {
        Self {
            a,
            b,
            operation: operation.into(),
        }
    }
}

/// The operands a calculation was performed with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    pub a: f64,
    pub b: f64,
}

/// A completed calculation, as returned to clients and kept in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The computed value. Always finite.
    pub result: f64,

    /// The normalized operation.
    pub operation: Operation,

    /// The original operands.
    pub inputs: Inputs,
}

impl CalculationResult {
    pub fn new(operation: Operation, a: f64, b: f64, result: f64) -> Self {
        Self {
            result,
            operation,
            inputs: Inputs { a, b },
        }
    }
}
