//! History storage.
//!
//! The history is injected into the calculator service as an
//! `Arc<dyn HistoryStore>`, so handlers never touch process-wide state.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domains::calculator::CalculationResult;

/// Storage for the ordered log of completed calculations.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append a record to the end of the log.
    async fn append(&self, record: CalculationResult);

    /// Snapshot of every record, in insertion order.
    async fn list(&self) -> Vec<CalculationResult>;

    /// Remove every record, returning how many were removed.
    async fn clear(&self) -> usize;
}

/// In-memory history guarded by a read/write lock.
///
/// Unbounded; the log lives as long as the store.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    records: RwLock<Vec<CalculationResult>>,
}

impl InMemoryHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistory {
    async fn append(&self, record: CalculationResult) {
        let mut records = self.records.write().await;
        records.push(record);
        debug!(size = records.len(), "Appended calculation to history");
    }

    async fn list(&self) -> Vec<CalculationResult> {
        self.records.read().await.clone()
    }

    async fn clear(&self) -> usize {
        // Take the records under the write lock so the count matches
        // exactly what was removed.
        let removed = std::mem::take(&mut *self.records.write().await);
        removed.len()
    }
}
