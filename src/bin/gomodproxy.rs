//! gomodproxy — standalone module proxy serving a local storage directory.
//!
//! See `gomodproxy::config` for the environment variables it reads.

use std::sync::Arc;

use anyhow::Context;
use gomodproxy::config::ProxyConfig;
use gomodproxy::{build_router, FsProvider, Provider};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gomodproxy=debug".into()),
        )
        .init();

    let config = ProxyConfig::from_env()?;

    if !config.storage_dir.is_dir() {
        tracing::warn!(
            "storage dir {} does not exist; every request will 404",
            config.storage_dir.display()
        );
    }
    let provider: Arc<dyn Provider> = Arc::new(FsProvider::new(&config.storage_dir));
    let app = build_router(provider);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!(
        "gomodproxy listening on {} (storage: {})",
        config.bind_addr,
        config.storage_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("gomodproxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
