use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::AppState;
use crate::procmem::MemorySnapshot;

/// GET /actuator/prometheus
///
/// Refreshes the memory gauges and returns the encoded registry. The refresh
/// here is in addition to the per-request hook, so a scrape always serves a
/// reading taken inside the handler itself.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = match MemorySnapshot::current() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to read process memory: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read process memory: {e}"),
            )
                .into_response();
        }
    };
    state.metrics.refresh(&snapshot);

    tracing::debug!("/actuator/prometheus encode scrape");
    match state.metrics.encode_metrics().await {
        Ok(metrics_text) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4")],
            metrics_text,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {e}"),
            )
                .into_response()
        }
    }
}
