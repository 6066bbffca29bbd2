// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{middleware, routing::get, Router};

use handlers::{health_check, metrics_handler, movie_page, root_handler, stylesheet_handler};
use std::env;

// Public exports (visible outside this module)
pub mod domain;
pub mod stats;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_in_memory_query_log, // ---
    create_metrics,
    create_movie_repository,
    create_noop_metrics,
    create_noop_query_log,
    create_prom_metrics,
};
pub use infrastructure::query_log::{InMemoryQueryLog, QueryRecord};

/// Build the HTTP router with configuration and metrics taken from the environment.
pub fn create_router() -> Result<Router> {
    // ---
    // Load all configuration from environment
    let config = AppConfig::from_env()?;

    create_router_from(&config)
}

/// Build the HTTP router from an already loaded configuration.
///
/// The metrics backend is still picked from `PAGE_STATS_METRICS_TYPE`.
pub fn create_router_from(config: &AppConfig) -> Result<Router> {
    // ---
    // Determine metrics implementation from environment
    let metrics_type = env::var("PAGE_STATS_METRICS_TYPE").unwrap_or_else(|_| "noop".to_string());
    let metrics = create_metrics(&metrics_type)?;

    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    let query_log = create_in_memory_query_log(config.stats.query_log_limit)?;

    create_router_with(config, query_log, metrics)
}

/// Build the HTTP router from explicit dependencies.
///
/// The page stats layer is added last, making it the outermost layer, so
/// its timing covers every other layer and the handler.
pub fn create_router_with(
    config: &AppConfig,
    query_log: std::sync::Arc<InMemoryQueryLog>,
    metrics: domain::MetricsPtr,
) -> Result<Router> {
    // ---
    if config.stats.debug {
        tracing::info!("Page stats enabled ({:?} style)", config.stats.style);
    }

    let movies = create_movie_repository(query_log.clone())?;

    let stats_state = stats::PageStatsState::new(config.stats.clone(), query_log, metrics.clone());
    let app_state = AppState::new(movies, metrics);

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/movies/{id}", get(movie_page))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/page-stats/default.css", get(stylesheet_handler))
        .with_state(app_state)
        .layer(middleware::from_fn_with_state(
            stats_state,
            stats::page_stats_middleware,
        ));

    Ok(router)
}
