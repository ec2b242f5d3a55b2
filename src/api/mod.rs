//! HTTP API module for the EDP memory exporter
//!
//! # Endpoints
//! - `GET /api/hello` — static greeting
//! - `GET /actuator/prometheus` — Prometheus metrics
//!
//! A refresh hook runs before every routed request and overwrites the memory
//! gauges with a fresh process reading.

pub mod handlers;

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;

use crate::config::Config;
use crate::metrics::MetricsRegistry;
use crate::procmem::MemorySnapshot;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub metrics: MetricsRegistry,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/hello", get(handlers::hello))
        .route("/actuator/prometheus", get(handlers::metrics_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            refresh_before_request,
        ))
        .with_state(state)
}

/// Middleware that refreshes the memory gauges before each request.
///
/// A failed proc read aborts the request with 500; the process never retries.
async fn refresh_before_request(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    match MemorySnapshot::current() {
        Ok(snapshot) => {
            state.metrics.refresh(&snapshot);
            next.run(request).await
        }
        Err(e) => {
            tracing::error!("Failed to refresh memory metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to refresh memory metrics: {e}"),
            )
                .into_response()
        }
    }
}
