use crate::domain::QueryLog;
use serde::Serialize;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// One executed query as kept by [`InMemoryQueryLog`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRecord {
    // ---
    /// Statement text, as passed by the caller.
    pub sql: String,

    /// Elapsed seconds as a decimal string with three places, e.g. `"0.002"`.
    pub time: String,
}

#[derive(Debug, Default)]
struct Inner {
    /// Total number of queries ever recorded.
    total: usize,
    records: VecDeque<QueryRecord>,
}

/// Bounded, process-wide query log.
///
/// Keeps the most recent `limit` records. `query_count` keeps counting past
/// the limit, so positions handed out earlier stay meaningful; durations for
/// records that have already been evicted are no longer available.
///
/// The log is shared by every request. Concurrent requests that both run
/// queries will see each other's queries in their window.
#[derive(Debug)]
pub struct InMemoryQueryLog {
    // ---
    limit: usize,
    inner: Mutex<Inner>,
}

impl InMemoryQueryLog {
    // ---
    pub fn new(limit: usize) -> Self {
        // ---
        Self {
            limit,
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock leaves the log consistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Appends a query that took `elapsed`.
    pub fn record(&self, sql: &str, elapsed: Duration) {
        // ---
        let record = QueryRecord {
            sql: sql.to_string(),
            time: format!("{:.3}", elapsed.as_secs_f64()),
        };

        let mut inner = self.lock();
        inner.total += 1;
        if self.limit == 0 {
            return;
        }
        if inner.records.len() == self.limit {
            inner.records.pop_front();
        }
        inner.records.push_back(record);
    }

    /// Awaits `query`, recording it under `sql` with the time it took.
    pub async fn timed<F, T>(&self, sql: &str, query: F) -> T
    where
        F: Future<Output = T>,
    {
        // ---
        let start = Instant::now();
        let output = query.await;
        self.record(sql, start.elapsed());

        output
    }

    /// Snapshot of the retained records, oldest first.
    pub fn queries(&self) -> Vec<QueryRecord> {
        self.lock().records.iter().cloned().collect()
    }

    /// Drops retained records. The running count is not reset.
    pub fn clear(&self) {
        self.lock().records.clear();
    }
}

impl QueryLog for InMemoryQueryLog {
    // ---
    fn query_count(&self) -> usize {
        self.lock().total
    }

    fn recent_query_durations(&self, since: usize) -> Vec<Duration> {
        // ---
        let inner = self.lock();
        let first_retained = inner.total - inner.records.len();
        let skip = since.saturating_sub(first_retained);

        inner
            .records
            .iter()
            .skip(skip)
            .filter_map(|record| match record.time.parse::<f64>() {
                Ok(secs) if secs.is_finite() && secs >= 0.0 => Some(Duration::from_secs_f64(secs)),
                _ => {
                    tracing::warn!("Ignoring query with unreadable time {:?}", record.time);
                    None
                }
            })
            .collect()
    }
}
