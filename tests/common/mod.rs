// Test helpers are intentionally partially used
#![allow(dead_code)]

use axum::{body::Body, http::Request, response::Response, Router};
use axum_page_stats::{
    create_in_memory_query_log, create_noop_metrics, create_router_with, AppConfig,
    InMemoryQueryLog, ServerConfig, StatsConfig,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;
use tower::ServiceExt;

// ============================================================================
// Test Setup
// ============================================================================

/// Configuration with page stats switched on or off and defaults elsewhere.
pub fn test_config(debug: bool) -> AppConfig {
    // ---
    AppConfig {
        server: ServerConfig {
            bind_addr: "127.0.0.1:0".to_string(),
        },
        stats: StatsConfig {
            debug,
            ..StatsConfig::default()
        },
    }
}

/// Demo router plus the query log it records into.
pub fn demo_router(config: &AppConfig) -> (Router, Arc<InMemoryQueryLog>) {
    // ---
    let query_log = create_in_memory_query_log(config.stats.query_log_limit)
        .expect("query log should be created");
    let metrics = create_noop_metrics().expect("metrics should be created");
    let router =
        create_router_with(config, query_log.clone(), metrics).expect("router should be created");

    (router, query_log)
}

/// Sends a GET for `uri` through `app` without a network listener.
pub async fn get(app: Router, uri: &str) -> Response {
    // ---
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    app.oneshot(request).await.expect("router is infallible")
}

/// Reads a whole response body as UTF-8.
pub async fn body_text(response: Response) -> String {
    // ---
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Extracts the value cell that follows `label` in a class-based fragment.
pub fn stat_value<'a>(html: &'a str, label: &str) -> Option<&'a str> {
    // ---
    let marker = format!(r#">{label}</td><td class="page_stats_value">"#);
    let start = html.find(&marker)? + marker.len();
    let end = start + html[start..].find("</td>")?;

    Some(&html[start..end])
}

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new(app: Router) -> Self {
        // --

        // Enable debug logging only when requested
        if std::env::var("TEST_DEBUG").is_ok() {
            std::env::set_var("RUST_LOG", "debug");
            std::env::set_var("NO_COLOR", "1");
        }

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}
