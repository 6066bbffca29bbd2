// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod health;
mod metrics;
mod movies;
mod page;
mod root;
mod stylesheet;

pub use health::health_check;
pub use metrics::metrics_handler;
pub use movies::movie_page;
pub use root::root_handler;
pub use stylesheet::stylesheet_handler;
