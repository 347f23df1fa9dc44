//! Libris digital library server.
//!
//! Serves the book catalog REST API over an in-memory backend.

use clap::Parser;
use libris_catalog::backends::memory::MemoryBackend;
use libris_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Creates the in-memory backend, seeded with the sample catalog if asked.
fn create_memory_backend(config: &ServerConfig) -> anyhow::Result<MemoryBackend> {
    if config.seed_sample_data {
        let backend = MemoryBackend::with_sample_data()?;
        info!("Seeded sample catalog");
        Ok(backend)
    } else {
        info!("Starting with an empty catalog");
        Ok(MemoryBackend::new())
    }
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        default_page_size = config.default_page_size,
        max_page_size = config.max_page_size,
        "Starting Libris server"
    );

    let backend = create_memory_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}
