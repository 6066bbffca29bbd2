//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait using
//! the Prometheus metrics format. It delegates to utility functions in sibling
//! modules (`counters.rs`, `recorder.rs`) which handle the actual metrics
//! collection via the global `metrics` crate registry.

use crate::domain::Metrics;
use crate::stats::PageStats;

/// Prometheus-based metrics implementation.
///
/// Empty because the `metrics` crate keeps a global registry; the handle
/// used for rendering lives in `recorder.rs`.
pub struct PrometheusMetrics {
    // Empty - uses global metrics registry pattern
}

impl PrometheusMetrics {
    pub fn new() -> Self {
        tracing::info!("Creating Prometheus metrics");
        PrometheusMetrics {}
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        super::render_metrics()
    }

    fn record_page_stats(&self, stats: &PageStats) {
        tracing::trace!("Recording page stats");
        super::track_page_stats(stats);
    }
}
