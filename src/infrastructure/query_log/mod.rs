mod in_memory;
mod noop;

pub use in_memory::{InMemoryQueryLog, QueryRecord};
pub use noop::NoopQueryLog;
use std::sync::Arc;

/// Creates a bounded in-memory query log keeping at most `limit` records.
///
/// The concrete type is returned so callers can record queries into it; it
/// coerces to `QueryLogPtr` wherever only the read side is needed.
pub fn create_in_memory(limit: usize) -> anyhow::Result<Arc<InMemoryQueryLog>> {
    // ---
    tracing::info!("Initializing in-memory query log (limit {})", limit);

    Ok(Arc::new(InMemoryQueryLog::new(limit)))
}

/// Creates a query log that never reports any queries.
pub fn create_noop() -> anyhow::Result<crate::domain::QueryLogPtr> {
    Ok(Arc::new(NoopQueryLog::new()))
}
