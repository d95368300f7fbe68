//! HTTP server initialization and runtime setup.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Builds an empty in-memory registry, binds the listener and serves until
/// Ctrl+C. In-flight requests are allowed to finish.
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails or the
/// server stops with a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let link_service =
        Arc::new(LinkService::new(repository).with_page_limits(config.page_limits()));
    tracing::info!("In-memory link registry ready");

    let state = AppState::new(link_service, &config.export_filename);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::warn!("Failed to listen for Ctrl+C: {e}. Shutting down"),
    }
}
