use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Outcome of the one and only recorder install attempt.
static HANDLE: OnceLock<Result<PrometheusHandle, String>> = OnceLock::new();

/// Install the Prometheus recorder globally and store the handle.
///
/// The install runs at most once per process; concurrent first callers wait
/// for it and later calls see the same outcome, so routers can be built more
/// than once (as the tests do).
pub fn init_metrics() -> anyhow::Result<()> {
    // ---
    HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .map_err(|err| err.to_string())
        })
        .as_ref()
        .map(|_| ())
        .map_err(|err| anyhow::anyhow!("Failed to install Prometheus recorder: {}", err))
}

/// Render the current metrics in Prometheus text format.
pub fn render_metrics() -> String {
    match HANDLE.get() {
        Some(Ok(handle)) => handle.render(),
        _ => String::new(),
    }
}
