//! Configuration management for the calculator server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::error::{Error, Result};
use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration structure for the calculator server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub http: HttpConfig,

    /// Problems found while loading, reported by `log_warnings`.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, used in log output.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "calculator-api".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            http: HttpConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `CALC_`.
    /// For example: `CALC_SERVER_NAME`, `CALC_LOG_LEVEL`, `CALC_HTTP_PORT`.
    ///
    /// This runs before logging is initialized, so invalid values are
    /// collected in `warnings` instead of being logged here.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("CALC_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("CALC_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(raw) = std::env::var("CALC_LOG_TIMESTAMPS") {
            match raw.to_lowercase().parse::<bool>() {
                Ok(with_timestamps) => config.logging.with_timestamps = with_timestamps,
                Err(_) => config.warnings.push(format!(
                    "Invalid CALC_LOG_TIMESTAMPS {:?}, keeping timestamps",
                    raw
                )),
            }
        }

        config.http = HttpConfig::from_env(&mut config.warnings);

        config
    }

    /// Log every problem found while loading the configuration.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }

    /// Check the configuration for values the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.http.host.trim().is_empty() {
            return Err(Error::config("HTTP host must not be empty"));
        }
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }
        Ok(())
    }
}
