use crate::stats::PageStats;
use std::sync::Arc;

/// Abstraction for page timing metrics (counters, histograms).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Record the timings measured for one instrumented request.
    fn record_page_stats(&self, stats: &PageStats);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
