//! HTTP API
//!
//! Serves search, statistics and the parameter schema over axum. The
//! dataset is loaded before binding and shared read-only across requests.

pub mod handlers;
pub mod response;
pub mod routes;


use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::search::SearchEngine;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// State shared by all handlers
#[derive(Debug, Default)]
pub struct AppState {
    pub dataset: Dataset,
    pub engine: SearchEngine,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            engine: SearchEngine::new(),
        }
    }
}

/// Serve `dataset` until the process is interrupted
pub async fn serve(config: ServerConfig, dataset: Dataset) -> Result<()> {
    let state = Arc::new(AppState::new(dataset));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;

    info!("Listening on http://{}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
