use crate::stats::PageStats;
use metrics::{counter, histogram};

/// Feed one request's page stats into the global registry.
pub fn track_page_stats(stats: &PageStats) {
    // ---
    histogram!("page_total_time_ms").record(stats.total_ms());
    histogram!("page_db_time_ms").record(stats.db_ms());
    histogram!("page_python_time_ms").record(stats.python_ms());
    counter!("page_db_queries_total").increment(stats.db_queries as u64);
    counter!("page_requests_total").increment(1);
}
