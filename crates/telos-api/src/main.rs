//! # telos-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Telos API.
//! Binds to configurable port (default 8090).

use std::sync::Arc;

use telos_api::state::{AppConfig, AppState};
use telos_engine::{DirStore, Orchestrator};
use telos_registry::Registry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let store = Arc::new(DirStore::new(&config.functions_dir));
    let registry = Arc::new(Registry::with_builtins());
    let orchestrator = Arc::new(Orchestrator::new(store, registry));

    tracing::info!(
        dir = %config.functions_dir.display(),
        auth = config.api_key.is_some(),
        "serving definitions"
    );

    let state = AppState::new(orchestrator, config.api_key.clone());
    let app = telos_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Telos API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
