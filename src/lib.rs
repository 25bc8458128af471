//! Calculator API Library
//!
//! A small HTTP service exposing four arithmetic operations and an
//! in-memory log of past calculations.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handle and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **calculator**: Operation parsing, arithmetic and the calculation service
//!   - **history**: The injectable history store
//!
//! # Example
//!
//! ```rust,no_run
//! use calculator_api::core::{CalculatorServer, Config, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = HttpTransport::new(config.http.clone());
//!     transport.run(CalculatorServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{CalculatorServer, Config, Error, Result};
