//! Mathserve - Fibonacci, factorial and mean over HTTP
//!
//! Every request is routed by its first path segment to a pure computation
//! and answered with a small JSON envelope.

mod api;
mod config;
mod domain;
mod engine;
mod error;
mod logging;
mod server;

use crate::config::Config;
use crate::domain::Operation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging, since it selects the log level
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    logging::init(&config.logging);

    tracing::info!("Starting Mathserve v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        log_level = %config.logging.level,
        operations = ?Operation::ALL.map(|op| op.as_str()),
        "Configuration loaded"
    );

    server::run(&config).await.map_err(|e| {
        tracing::error!(error = %e, "Server terminated with error");
        e
    })
}
