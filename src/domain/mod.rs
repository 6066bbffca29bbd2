mod metrics;
mod movie;
mod query_log;
mod repository;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose the query log collaborator used by the page stats layer
pub use query_log::{QueryLog, QueryLogPtr};

// Publicly expose the demo catalogue abstractions
pub use movie::Movie;
pub use repository::{MovieRepository, MovieRepositoryPtr};
