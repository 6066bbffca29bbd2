use super::movie::Movie;
use anyhow::Result;
use std::sync::Arc;

/// Abstraction for the demo catalogue storage.
///
/// Implementations are expected to report every lookup to the query log so
/// the page stats layer can attribute database time to the request.
#[async_trait::async_trait]
pub trait MovieRepository: Send + Sync {
    // ---
    /// List every movie, ordered by id.
    async fn list_movies(&self) -> Result<Vec<Movie>>;

    /// Get a movie by id.
    async fn get_movie(&self, id: &str) -> Result<Option<Movie>>;
}

/// Type alias for any backend that implements MovieRepository.
pub type MovieRepositoryPtr = Arc<dyn MovieRepository>;
