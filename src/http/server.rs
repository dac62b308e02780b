//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
#[error("HTTP server failed on {addr}: {source}")]
pub struct ServerError {
    pub addr: SocketAddr,
    #[source]
    pub source: std::io::Error,
}

/// Start the HTTP server on the given address.
///
/// This function blocks until the server shuts down. A bind failure (port
/// already in use, insufficient permissions) surfaces here as an error.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let handle = Handle::new();

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|source| ServerError { addr, source })
}
