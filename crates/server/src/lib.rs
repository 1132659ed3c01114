//! `exosift-server` — HTTP boundary for catalog triage runs.
//!
//! One request operation: `POST /run` takes a catalog file path, executes
//! the pipeline, and returns the row total plus the class-label
//! distribution. Stateless: every request is an independent, isolated run
//! over read-only shared constants, so concurrent requests need no
//! coordination.

pub mod error;
pub mod routes;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;

pub use error::ApiError;

/// Build the service router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/run", post(routes::run))
}

/// Bind and serve until the process exits.
pub async fn serve(addr: SocketAddr) -> Result<(), String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    let local = listener.local_addr().map_err(|e| e.to_string())?;
    tracing::info!("exosift API listening on http://{local}");

    axum::serve(listener, router())
        .await
        .map_err(|e| e.to_string())
}
