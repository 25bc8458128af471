//! HTTP transport implementation.
//!
//! JSON over HTTP. Routes:
//!
//! - `GET /` - welcome message
//! - `GET /health` - liveness check
//! - `POST /calculate` - evaluate a calculation
//! - `GET /history` - list recorded calculations
//! - `GET|POST /history/clear` - clear the history

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, instrument, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::CalculatorServer;
use crate::domains::calculator::{CalculationError, CalculationRequest, CalculationResult};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<CalculationResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearHistoryResponse {
    pub message: String,
    pub total_cleared: usize,
}

impl IntoResponse for CalculationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Turn a JSON extractor rejection into a `{"detail"}` body, keeping its status.
fn rejection_response(rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    (
        rejection.status(),
        Json(ErrorDetail {
            detail: rejection.body_text(),
        }),
    )
        .into_response()
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the router for the given server.
    ///
    /// Exposed separately from `run` so the routes can be driven in-process.
    pub fn router(&self, server: CalculatorServer) -> Router {
        let app = Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_check))
            .route("/calculate", post(calculate))
            .route("/history", get(get_history))
            .route("/history/clear", get(clear_history).post(clear_history))
            .with_state(server);

        let app = app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app.layer(cors)
        } else {
            app
        }
    }

    /// Run the HTTP transport until a shutdown signal is received.
    pub async fn run(self, server: CalculatorServer) -> TransportResult<()> {
        let addr = self.address();
        info!("Starting transport: {}", self.config.description());

        let name = server.name().to_string();
        let version = server.version().to_string();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "{} v{} ready - listening on {} (CORS {})",
            name, version, addr, cors_status
        );
        info!("  → Calculate: POST /calculate");
        info!("  → History:   GET /history, GET|POST /history/clear");
        info!("  → Health:    GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Resolve when Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

/// Root handler.
async fn root_handler(State(server): State<CalculatorServer>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: server.welcome().to_string(),
    })
}

/// Health check endpoint.
async fn health_check(State(server): State<CalculatorServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: server.health().to_string(),
    })
}

/// Evaluate a calculation.
#[instrument(skip_all)]
async fn calculate(
    State(server): State<CalculatorServer>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match server.calculate(&request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List recorded calculations.
async fn get_history(State(server): State<CalculatorServer>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: server.history().await,
    })
}

/// Clear the history.
#[instrument(skip_all)]
async fn clear_history(State(server): State<CalculatorServer>) -> Json<ClearHistoryResponse> {
    let total_cleared = server.clear_history().await;
    Json(ClearHistoryResponse {
        message: "History cleared".to_string(),
        total_cleared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use axum::body::Body;
    use axum::http::{Method, Request, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        HttpTransport::new(HttpConfig::default()).router(CalculatorServer::new(Config::default()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn calc(app: &Router, a: f64, b: f64, operation: &str) -> (StatusCode, Value) {
        send(
            app,
            Method::POST,
            "/calculate",
            Some(json!({ "a": a, "b": b, "operation": operation })),
        )
        .await
    }

    #[tokio::test]
    async fn test_root() {
        let (status, body) = send(&app(), Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Welcome to Calculator API" }));
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_arithmetic() {
        let app = app();
        for (op, a, b, expected) in [
            ("add", 5.0, 3.0, 8.0),
            ("subtract", 10.0, 3.0, 7.0),
            ("multiply", 4.0, 5.0, 20.0),
            ("divide", 10.0, 2.0, 5.0),
        ] {
            let (status, body) = calc(&app, a, b, op).await;
            assert_eq!(status, StatusCode::OK, "{op}");
            assert_eq!(body["result"], json!(expected), "{op}");
        }
    }

    #[tokio::test]
    async fn test_calculate_response_shape() {
        let (status, body) = calc(&app(), 5.0, 3.0, "ADD").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "result": 8.0, "operation": "add", "inputs": { "a": 5.0, "b": 3.0 } })
        );
    }

    #[tokio::test]
    async fn test_division_by_zero() {
        let (status, body) = calc(&app(), 10.0, 0.0, "divide").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let detail = body["detail"].as_str().unwrap().to_lowercase();
        assert!(detail.contains("division by zero"));
    }

    #[tokio::test]
    async fn test_invalid_operation() {
        let (status, body) = calc(&app(), 5.0, 3.0, "power").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "detail": "Unsupported operation: power" }));
    }

    #[tokio::test]
    async fn test_overflow_is_client_error() {
        let (status, body) = calc(&app(), 1e308, 10.0, "multiply").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "detail": "Result is not a finite number" }));
    }

    #[tokio::test]
    async fn test_malformed_body_uses_detail_shape() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/calculate",
            Some(json!({ "a": "five", "b": 3, "operation": "add" })),
        )
        .await;
        assert!(status.is_client_error());
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_history() {
        let app = app();
        send(&app, Method::GET, "/history/clear", None).await;

        calc(&app, 2.0, 3.0, "add").await;

        let (status, body) = send(&app, Method::GET, "/history", None).await;
        assert_eq!(status, StatusCode::OK);
        let history = body["history"].as_array().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["result"], json!(5.0));
    }

    #[tokio::test]
    async fn test_history_order_and_failures_not_recorded() {
        let app = app();
        calc(&app, 1.0, 2.0, "add").await;
        calc(&app, 1.0, 0.0, "divide").await;
        calc(&app, 6.0, 2.0, "divide").await;

        let (_, body) = send(&app, Method::GET, "/history", None).await;
        let operations: Vec<&str> = body["history"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["operation"].as_str().unwrap())
            .collect();
        assert_eq!(operations, vec!["add", "divide"]);
        assert_eq!(body["history"][1]["result"], json!(3.0));
    }

    #[tokio::test]
    async fn test_clear_history_reports_cleared_count() {
        let app = app();
        calc(&app, 1.0, 1.0, "add").await;
        calc(&app, 2.0, 2.0, "add").await;

        let (status, body) = send(&app, Method::GET, "/history/clear", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "History cleared", "total_cleared": 2 }));

        let (_, body) = send(&app, Method::GET, "/history", None).await;
        assert_eq!(body, json!({ "history": [] }));
    }

    #[tokio::test]
    async fn test_clear_history_accepts_post() {
        let app = app();
        calc(&app, 1.0, 1.0, "add").await;

        let (status, body) = send(&app, Method::POST, "/history/clear", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_cleared"], json!(1));
    }

    #[tokio::test]
    async fn test_unknown_route_and_method() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::GET, "/calculate", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_calculation_errors_map_to_400() {
        for err in [
            CalculationError::UnsupportedOperation("power".into()),
            CalculationError::DivisionByZero,
            CalculationError::NonFiniteResult,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_address() {
        let transport = HttpTransport::new(HttpConfig {
            port: 8123,
            host: "127.0.0.1".to_string(),
            enable_cors: false,
        });
        assert_eq!(transport.address(), "127.0.0.1:8123");
    }
}
