//! Calculator service implementation.
//!
//! The CalculatorService validates requests, evaluates them and records
//! successful results in the injected history store.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::error::CalculationError;
use super::models::{CalculationRequest, CalculationResult};
use super::operation::Operation;
use crate::domains::history::HistoryStore;

/// Service for evaluating calculations and managing their history.
#[derive(Clone)]
pub struct CalculatorService {
    history: Arc<dyn HistoryStore>,
}

impl CalculatorService {
    /// Create a new service backed by the given history store.
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }

    /// Evaluate a calculation and append it to history.
    ///
    /// Nothing is recorded when the request is rejected.
    #[instrument(skip_all, fields(operation = %request.operation))]
    pub async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, CalculationError> {
        let outcome = request
            .operation
            .parse::<Operation>()
            .and_then(|op| op.apply(request.a, request.b).map(|value| (op, value)));

        let (operation, value) = match outcome {
            Ok(v) => v,
            Err(e) => {
                warn!("Calculation rejected: {}", e);
                return Err(e);
            }
        };

        let record = CalculationResult::new(operation, request.a, request.b, value);
        self.history.append(record.clone()).await;

        info!(
            "{} {} {} = {}",
            request.a, operation, request.b, record.result
        );

        Ok(record)
    }

    /// Every recorded calculation, oldest first.
    pub async fn history(&self) -> Vec<CalculationResult> {
        self.history.list().await
    }

    /// Clear the history, returning the number of records removed.
    #[instrument(skip(self))]
    pub async fn clear_history(&self) -> usize {
        let cleared = self.history.clear().await;
        info!("Cleared {} calculation(s) from history", cleared);
        cleared
    }
}
