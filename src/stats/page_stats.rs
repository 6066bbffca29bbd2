use std::time::Duration;

/// Timings measured for a single instrumented request.
///
/// Lives only for the duration of the request; it is rendered into the
/// HTML fragment and handed to the metrics backend, then dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageStats {
    // ---
    /// Wall-clock time spent in the downstream service.
    pub total_time: Duration,

    /// Sum of the elapsed times reported for the request's queries.
    pub db_time: Duration,

    /// Number of queries recorded while the request was running.
    pub db_queries: usize,
}

impl PageStats {
    // ---
    pub fn new(total_time: Duration, db_time: Duration, db_queries: usize) -> Self {
        // ---
        Self {
            total_time,
            db_time,
            db_queries,
        }
    }

    /// Builds stats from the measured wall time and the per-query durations.
    pub fn from_query_durations(total_time: Duration, durations: &[Duration]) -> Self {
        // ---
        let db_time = durations.iter().sum();

        Self::new(total_time, db_time, durations.len())
    }

    pub fn total_ms(&self) -> f64 {
        self.total_time.as_secs_f64() * 1000.0
    }

    pub fn db_ms(&self) -> f64 {
        self.db_time.as_secs_f64() * 1000.0
    }

    /// Time attributed to application code: total minus DB time.
    ///
    /// Not clamped. Query times are measured independently of the request
    /// clock, so this can come out negative.
    pub fn python_ms(&self) -> f64 {
        self.total_ms() - self.db_ms()
    }
}
