//! Calculator domain module.
//!
//! Parses operation names, evaluates the arithmetic and records results.
//!
//! - `operation.rs` - The `Operation` enum and its arithmetic
//! - `models.rs` - Request and result types
//! - `service.rs` - `CalculatorService`, which ties evaluation to history
//! - `error.rs` - Client-facing calculation errors

mod error;
mod models;
mod operation;
mod service;

pub use error::CalculationError;
pub use models::{CalculationRequest, CalculationResult, Inputs};
pub use operation::Operation;
pub use service::CalculatorService;
