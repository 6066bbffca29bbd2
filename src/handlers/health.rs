use axum::{http::StatusCode, Json};

#[derive(serde::Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Responds with the health status of the server.
///
/// Returns JSON, so the page stats layer finds no `</body>` and leaves the
/// response untouched.
///
/// # Examples
/// - `GET /health` → 200 OK `{"status":"ok"}`
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    // ---
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}
