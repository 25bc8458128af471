//! Transport layer for the calculator server.
//!
//! The server is exposed over HTTP with JSON request and response bodies.
//! The transport owns the listener, the router and the mapping from
//! domain errors to HTTP responses; all calculation logic is delegated to
//! the `CalculatorServer`.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
