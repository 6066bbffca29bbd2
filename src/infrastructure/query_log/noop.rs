use crate::domain::QueryLog;
use std::time::Duration;

/// Query log for applications without a database: never reports a query.
pub struct NoopQueryLog;

impl NoopQueryLog {
    pub fn new() -> Self {
        NoopQueryLog
    }
}

impl QueryLog for NoopQueryLog {
    // ---
    fn query_count(&self) -> usize {
        0
    }
    fn recent_query_durations(&self, _: usize) -> Vec<Duration> {
        Vec::new()
    }
}
