use crate::app_state::AppState;
use axum::{extract::State, http::header::CONTENT_TYPE, response::IntoResponse};

/// Handler for the `/metrics` endpoint.
///
/// Returns the page stats histograms and counters in Prometheus text format.
/// With the no-op backend the body is empty.
pub async fn metrics_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    // ---
    let metrics_text = app_state.metrics().render();

    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        metrics_text,
    )
}
