use crate::domain::{Movie, MovieRepository};
use crate::infrastructure::query_log::InMemoryQueryLog;
use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Catalogue held in memory, standing in for a database table.
///
/// Each operation goes through [`InMemoryQueryLog::timed`] with the SQL a
/// real backend would run, so page stats show it as a query.
pub struct InMemoryMovieRepository {
    // ---
    movies: BTreeMap<String, Movie>,
    query_log: Arc<InMemoryQueryLog>,
}

impl InMemoryMovieRepository {
    // ---
    /// A repository pre-loaded with a few well-known titles.
    pub fn seeded(query_log: Arc<InMemoryQueryLog>) -> Self {
        // ---
        let seed = [
            Movie::new("1", "The Matrix", 1999, 4.7),
            Movie::new("2", "Spirited Away", 2001, 4.8),
            Movie::new("3", "Alien", 1979, 4.5),
            Movie::new("4", "Arrival", 2016, 4.3),
        ];

        let movies = seed.into_iter().map(|m| (m.id.clone(), m)).collect();

        Self {
            movies,
            query_log,
        }
    }
}

#[async_trait::async_trait]
impl MovieRepository for InMemoryMovieRepository {
    // ---
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        // ---
        let movies: Vec<Movie> = self
            .query_log
            .timed("SELECT id, title, year, stars FROM movies ORDER BY id", async {
                self.movies.values().cloned().collect()
            })
            .await;

        Ok(movies)
    }

    async fn get_movie(&self, id: &str) -> Result<Option<Movie>> {
        // ---
        let movie = self
            .query_log
            .timed("SELECT id, title, year, stars FROM movies WHERE id = $1", async {
                self.movies.get(id).cloned()
            })
            .await;

        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::domain::QueryLog;

    fn repo() -> (InMemoryMovieRepository, Arc<InMemoryQueryLog>) {
        // ---
        let log = Arc::new(InMemoryQueryLog::new(100));
        (InMemoryMovieRepository::seeded(log.clone()), log)
    }

    #[tokio::test]
    async fn every_call_is_logged() {
        // ---
        let (repo, log) = repo();

        let movies = repo.list_movies().await.unwrap();
        assert_eq!(movies.len(), 4);
        assert_eq!(movies[0].title, "The Matrix");

        let _ = repo.get_movie("2").await.unwrap();
        let _ = repo.get_movie("missing").await.unwrap();

        assert_eq!(log.query_count(), 3);
        assert!(log.queries()[1].sql.contains("WHERE id = $1"));
    }
}
