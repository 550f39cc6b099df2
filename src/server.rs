//! HTTP server initialization and runtime setup.
//!
//! Handles backend construction, Axum server lifecycle and graceful shutdown.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;
use crate::storage::new_store;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes the configured storage backend, starts the Axum server and,
/// on shutdown, closes the backend so background refresh tasks stop cleanly.
///
/// # Errors
///
/// Returns an error if:
/// - Backend construction fails (e.g. the redirects file cannot be loaded)
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = new_store(&config).await?;
    tracing::info!("Backend initialized ({})", config.backend_type);

    let state = AppState::new(store.clone(), config.backend_type);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await?;
    tracing::info!("Backend closed, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {e}");
    }
}
