use crate::stats::DEFAULT_STYLESHEET;
use axum::{http::header::CONTENT_TYPE, response::IntoResponse};

/// Serves the default stylesheet for the class-based stats fragment.
pub async fn stylesheet_handler() -> impl IntoResponse {
    // ---
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], DEFAULT_STYLESHEET)
}
