//! # Application State
//!
//! Shared state passed to route handlers via the `State` extractor.
//! Holds the orchestrator (store + cache + registry) and the optional
//! API key. Cloning is cheap — everything heavy sits behind an `Arc`.

use std::sync::Arc;

use telos_engine::Orchestrator;

use crate::auth::SecretToken;

/// Configuration for the API process, read from the environment by
/// the binary entry point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind. `TELOS_PORT`, default 8090.
    pub port: u16,
    /// Static API key. `TELOS_API_KEY`; absent disables auth.
    pub api_key: Option<SecretToken>,
    /// Directory of definition documents. `TELOS_FUNCTIONS_DIR`,
    /// default `functions`.
    pub functions_dir: std::path::PathBuf,
}

impl AppConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let port = std::env::var("TELOS_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8090);
        let api_key = std::env::var("TELOS_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretToken::new);
        let functions_dir = std::env::var("TELOS_FUNCTIONS_DIR")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|_| std::path::PathBuf::from("functions"));
        Self {
            port,
            api_key,
            functions_dir,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The invocation engine.
    pub orchestrator: Arc<Orchestrator>,
    /// Optional static API key; `None` disables auth.
    pub api_key: Option<SecretToken>,
}

impl AppState {
    /// Build state around an orchestrator.
    pub fn new(orchestrator: Arc<Orchestrator>, api_key: Option<SecretToken>) -> Self {
        Self {
            orchestrator,
            api_key,
        }
    }
}
