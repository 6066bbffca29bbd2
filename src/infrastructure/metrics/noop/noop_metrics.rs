use crate::domain::Metrics;
use crate::stats::PageStats;

/// No-op metrics implementation.
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }
    fn record_page_stats(&self, _: &PageStats) {}
}
