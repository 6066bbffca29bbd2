pub mod noop;
pub mod prometheus;

// Re-export the factory functions for easy access
pub use noop::create as create_noop_metrics;
pub use prometheus::create as create_prom_metrics;

/// Selects the page stats metrics backend by name.
///
/// `"prom"` installs the Prometheus recorder; anything else is a no-op.
pub fn create_by_type(metrics_type: &str) -> anyhow::Result<crate::domain::MetricsPtr> {
    // ---
    match metrics_type.trim() {
        "prom" => create_prom_metrics(),
        other => {
            if other != "noop" {
                tracing::warn!("Unknown metrics type {:?}, using noop", other);
            }
            create_noop_metrics()
        }
    }
}
