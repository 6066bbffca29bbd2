//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` contains the
//! catalogue repository and the metrics backend; the page stats layer gets
//! its own state (see [`crate::stats::PageStatsState`]).
//!
//! The state is cheaply cloneable (`Arc` internally) so it can be passed to
//! each request handler without copying resources.

use crate::domain::{MetricsPtr, MovieRepositoryPtr};

/// Shared application state passed to all Axum handlers.
///
/// Built once in `create_router_with()`, attached with `.with_state()`,
/// and cloned by Axum for every request.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Demo catalogue. Every call is recorded in the query log.
    movies: MovieRepositoryPtr,

    /// Metrics backend the page stats layer records into.
    ///
    /// Either Prometheus-backed or no-op, depending on configuration.
    metrics: MetricsPtr,
}

impl AppState {
    // ---

    pub fn new(movies: MovieRepositoryPtr, metrics: MetricsPtr) -> Self {
        // ---
        AppState { movies, metrics }
    }

    /// Get a reference to the catalogue repository.
    pub(crate) fn movies(&self) -> &MovieRepositoryPtr {
        // ---
        &self.movies
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }
}
