//! Request timing hook.
//!
//! Wraps the downstream service, measures how long it takes and how much of
//! that was spent in database queries, and splices a summary into HTML
//! responses just before `</body>`. Install it as the outermost layer so the
//! measured time covers the whole stack:
//!
//! ```ignore
//! router.layer(axum::middleware::from_fn_with_state(stats_state, page_stats_middleware))
//! ```

use super::{charset_from_content_type, inject_fragment, render_fragment, PageStats};
use crate::config::StatsConfig;
use crate::domain::{MetricsPtr, QueryLogPtr};
use axum::{
    body::{Body, HttpBody},
    extract::{Request, State},
    http::{
        header::{CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE},
        HeaderMap, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;

/// State handed to [`page_stats_middleware`] at construction time.
///
/// Everything the hook needs is injected here; there is no process-wide
/// debug switch or query log.
#[derive(Clone)]
pub struct PageStatsState {
    // ---
    config: StatsConfig,
    query_log: QueryLogPtr,
    metrics: MetricsPtr,
}

impl PageStatsState {
    // ---
    pub fn new(config: StatsConfig, query_log: QueryLogPtr, metrics: MetricsPtr) -> Self {
        // ---
        Self {
            config,
            query_log,
            metrics,
        }
    }
}

/// Axum middleware measuring the request and annotating the HTML response.
///
/// With `debug` off this only forwards the request. Otherwise the downstream
/// service is run exactly once and its response is returned, possibly with
/// the stats fragment added to the body. Nothing the downstream service
/// produces is caught or rewritten apart from that.
pub async fn page_stats_middleware(
    State(stats): State<PageStatsState>,
    request: Request,
    next: Next,
) -> Response {
    // ---
    if !stats.config.debug {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let queries_before = stats.query_log.query_count();

    let start = Instant::now();
    let response = next.run(request).await;
    let total_time = start.elapsed();

    let db_queries = stats.query_log.query_count().saturating_sub(queries_before);
    let durations = if db_queries > 0 {
        stats.query_log.recent_query_durations(queries_before)
    } else {
        Vec::new()
    };

    let mut page_stats = PageStats::from_query_durations(total_time, &durations);
    // Records evicted from a bounded log still count as queries.
    page_stats.db_queries = db_queries;

    stats.metrics.record_page_stats(&page_stats);

    tracing::debug!(
        %method,
        %path,
        total_ms = page_stats.total_ms(),
        python_ms = page_stats.python_ms(),
        db_ms = page_stats.db_ms(),
        db_queries,
        "page stats"
    );

    let fragment = render_fragment(&page_stats, stats.config.style);

    splice_fragment(response, &fragment, stats.config.max_body_bytes).await
}

/// True when the body can be buffered and searched as-is.
///
/// `body_upper_bound` is the body's size hint; `None` means the size is not
/// known up front (a stream), and such bodies are never buffered.
fn is_spliceable(
    headers: &HeaderMap,
    body_upper_bound: Option<u64>,
    max_body_bytes: usize,
) -> bool {
    // ---
    let encoded = headers
        .get(CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| !v.trim().eq_ignore_ascii_case("identity"));
    if encoded {
        tracing::debug!("Skipping page stats for encoded response body");
        return false;
    }

    let Some(body_upper_bound) = body_upper_bound else {
        tracing::debug!("Skipping page stats for streamed response body");
        return false;
    };

    let declared_len = headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<usize>().ok());
    let too_big = declared_len.is_some_and(|len| len > max_body_bytes)
        || body_upper_bound > max_body_bytes as u64;
    if too_big {
        tracing::debug!("Skipping page stats for response over {} bytes", max_body_bytes);
        return false;
    }

    true
}

/// Buffers the response body and inserts `fragment` before `</body>`.
async fn splice_fragment(response: Response, fragment: &str, max_body_bytes: usize) -> Response {
    // ---
    let body_upper_bound = response.body().size_hint().upper();
    if !is_spliceable(response.headers(), body_upper_bound, max_body_bytes) {
        return response;
    }

    let (mut parts, body) = response.into_parts();

    let bytes = match axum::body::to_bytes(body, max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("Failed to buffer response body for page stats: {:?}", err);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if bytes.is_empty() {
        return Response::from_parts(parts, Body::from(bytes));
    }

    let charset = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(charset_from_content_type);

    match inject_fragment(&bytes, fragment, charset.as_deref()) {
        Ok(Some(patched)) => {
            parts
                .headers
                .insert(CONTENT_LENGTH, HeaderValue::from(patched.len()));
            Response::from_parts(parts, Body::from(patched))
        }
        Ok(None) => Response::from_parts(parts, Body::from(bytes)),
        Err(err) => {
            tracing::error!("Failed to inject page stats: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
