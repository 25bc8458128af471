//! History domain module.
//!
//! Owns the ordered log of completed calculations.

mod store;

pub use store::{HistoryStore, InMemoryHistory};
