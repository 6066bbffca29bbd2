mod in_memory;

pub use in_memory::InMemoryMovieRepository;
use super::query_log::InMemoryQueryLog;
use std::sync::Arc;

/// Creates the demo catalogue, seeded with a handful of movies.
///
/// Every repository call is recorded in `query_log`.
pub fn create(query_log: Arc<InMemoryQueryLog>) -> anyhow::Result<crate::domain::MovieRepositoryPtr> {
    // ---
    Ok(Arc::new(InMemoryMovieRepository::seeded(query_log)))
}
