use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{Router, http::StatusCode, routing::get};
use tokio::net::TcpListener;
use tracing::info;

pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { "I'm alive" }))
        .route("/health", get(|| async { StatusCode::OK }))
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind keep-alive listener on {}", addr))
}

/// Serves the uptime endpoint until the process exits.
pub async fn serve(listener: TcpListener) -> Result<()> {
    info!(addr = ?listener.local_addr().ok(), "Keep-alive endpoint listening");
    axum::serve(listener, router())
        .await
        .context("Keep-alive server stopped")
}
