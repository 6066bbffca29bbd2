use std::sync::Arc;
use std::time::Duration;

/// Read-only view of the database queries executed by the application.
///
/// The page stats layer snapshots `query_count()` before running a request
/// and asks for the durations of everything recorded after that snapshot.
/// Counts are absolute and never go backwards for the lifetime of a log,
/// even if the backend discards old records.
pub trait QueryLog: Send + Sync {
    // ---
    /// Total number of queries recorded so far.
    fn query_count(&self) -> usize;

    /// Elapsed times of the queries recorded at or after position `since`.
    ///
    /// `since` is a value previously returned by [`QueryLog::query_count`].
    fn recent_query_durations(&self, since: usize) -> Vec<Duration>;
}

/// Type alias for any backend that implements QueryLog.
pub type QueryLogPtr = Arc<dyn QueryLog>;
