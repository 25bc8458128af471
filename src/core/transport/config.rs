//! HTTP transport configuration.

use serde::{Deserialize, Serialize};

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable permissive CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_port() -> u16 {
    8000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl HttpConfig {
    /// Load HTTP config from environment variables.
    ///
    /// Unparseable values fall back to their defaults; a message for each is
    /// pushed onto `warnings` so it can be logged once logging is up.
    pub fn from_env(warnings: &mut Vec<String>) -> Self {
        let port = match std::env::var("CALC_HTTP_PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warnings.push(format!(
                    "Invalid CALC_HTTP_PORT {:?}, using {}",
                    raw,
                    default_port()
                ));
                default_port()
            }),
            Err(_) => default_port(),
        };
        let host = std::env::var("CALC_HTTP_HOST").unwrap_or_else(|_| default_host());
        let enable_cors = match std::env::var("CALC_HTTP_CORS") {
            Ok(raw) => raw.to_lowercase().parse::<bool>().unwrap_or_else(|_| {
                warnings.push(format!(
                    "Invalid CALC_HTTP_CORS {:?}, using {}",
                    raw,
                    default_cors()
                ));
                default_cors()
            }),
            Err(_) => default_cors(),
        };

        Self {
            port,
            host,
            enable_cors,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}", self.address())
    }
}
