//! Error types for the calculator server.
//!
//! Calculation failures are client errors and are answered directly by the
//! HTTP transport, and transport failures carry their own `TransportError`.
//! This module covers configuration that the server cannot start with.

use thiserror::Error;

/// A specialized Result type for calculator server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the calculator server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
