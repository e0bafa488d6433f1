//! Leaderboard HTTP service
//!
//! The ranking store is created once at startup, shared with the handlers
//! through `State`, and optionally written to disk on shutdown.

pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

pub use config::ServerConfig;

use crate::error::Result;
use crate::ranking::RankingStore;

/// Shared handler state
#[derive(Debug)]
pub struct AppState {
    pub store: RankingStore,
}

impl AppState {
    pub fn new(store: RankingStore) -> Arc<Self> {
        Arc::new(Self { store })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ranking", get(routes::get_ranking).post(routes::post_ranking))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run until Ctrl-C, then persist rankings if configured
pub async fn run(config: ServerConfig) -> Result<()> {
    let store = match &config.rankings_path {
        Some(path) => RankingStore::load(path)?,
        None => RankingStore::new(),
    };
    let state = AppState::new(store);
    let app = router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    log::info!("Bug Swat leaderboard listening on http://{}", config.addr);
    log::info!("    Rankings API: http://{}/ranking", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(path) = &config.rankings_path {
        state.store.save(path)?;
    }
    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown requested");
}
