use anyhow::Result;
use axum_page_stats::{create_router_from, AppConfig};
use tokio::signal;
use tracing::info;

/// Resolves on Ctrl-C so in-flight requests can finish before exit.
async fn shutdown_signal() {
    // ---
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let app = create_router_from(&config)?;

    let endpoint = config.server.bind_addr;

    info!("Starting at endpoint:{}", endpoint);
    info!("Starting page stats demo server v{}...", env!("CARGO_PKG_VERSION"));
    if !config.stats.debug {
        info!("PAGE_STATS_DEBUG is off, responses will not be annotated");
    }

    let listener = tokio::net::TcpListener::bind(&endpoint).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
