pub mod metrics;
pub mod movies;
pub mod query_log;

// Re-export the factory functions for easy access
pub use metrics::{create_by_type as create_metrics, create_noop_metrics, create_prom_metrics};
pub use movies::create as create_movie_repository;
pub use query_log::{
    create_in_memory as create_in_memory_query_log, // ---
    create_noop as create_noop_query_log,
};
