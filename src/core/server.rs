//! Calculator server implementation.
//!
//! This module contains the server handle shared by every transport
//! handler. It owns the configuration and the calculator service, which in
//! turn owns the injected history store.

use std::sync::Arc;

use super::config::Config;
use crate::domains::calculator::{
    CalculationError, CalculationRequest, CalculationResult, CalculatorService,
};
use crate::domains::history::{HistoryStore, InMemoryHistory};

/// Greeting returned by the root endpoint.
pub const WELCOME_MESSAGE: &str = "Welcome to Calculator API";

/// Status reported by the health check.
pub const HEALTHY_STATUS: &str = "healthy";

/// The main calculator server handle.
///
/// Cheap to clone; clones share the same history.
#[derive(Clone)]
pub struct CalculatorServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for evaluating calculations.
    calculator: CalculatorService,
}

impl CalculatorServer {
    /// Create a new server with an empty in-memory history.
    pub fn new(config: Config) -> Self {
        Self::with_history(config, Arc::new(InMemoryHistory::new()))
    }

    /// Create a new server backed by the given history store.
    pub fn with_history(config: Config, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            config: Arc::new(config),
            calculator: CalculatorService::new(history),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Greeting for the root endpoint.
    pub fn welcome(&self) -> &'static str {
        WELCOME_MESSAGE
    }

    /// Liveness status. Constant while the process is serving.
    pub fn health(&self) -> &'static str {
        HEALTHY_STATUS
    }

    /// Evaluate a calculation and record it in history.
    pub async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, CalculationError> {
        self.calculator.calculate(request).await
    }

    /// Every recorded calculation, oldest first.
    pub async fn history(&self) -> Vec<CalculationResult> {
        self.calculator.history().await
    }

    /// Clear the history, returning how many records were removed.
    pub async fn clear_history(&self) -> usize {
        self.calculator.clear_history().await
    }
}
