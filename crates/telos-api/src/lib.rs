//! # telos-api — HTTP Boundary
//!
//! Axum service exposing the invocation engine over HTTP.
//!
//! ## API Surface
//!
//! | Route                           | Module                  | Meaning                      |
//! |---------------------------------|-------------------------|------------------------------|
//! | `POST /v1/execution/{name}`     | [`routes::execution`]   | Invoke a function            |
//! | `GET  /v1/functions`            | [`routes::functions`]   | Exported definitions         |
//! | `GET  /v1/functions/names`      | [`routes::functions`]   | Function names               |
//! | `GET  /v1/functions/{name}`     | [`routes::functions`]   | One exported definition      |
//! | `GET  /v1/functions/{name}/schema` | [`routes::functions`] | Declared response schema     |
//! | `GET  /openapi.json`            | [`openapi`]             | OpenAPI document             |
//! | `GET  /health/liveness`         | here                    | Process is up                |
//! | `GET  /health/readiness`        | here                    | Ready to serve               |
//!
//! ## Envelope vs. error body
//!
//! The execution route answers with the engine's uniform envelope at
//! the envelope's own status code. The functions routes are plain REST
//! and use [`error::AppError`] for their failure bodies.
//!
//! Health probes are mounted outside the auth middleware so they stay
//! reachable without credentials.

pub mod auth;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with routes and middleware.
pub fn app(state: AppState) -> Router {
    let auth = auth::AuthLayerConfig {
        api_key: state.api_key.clone(),
    };

    let api = Router::new()
        .merge(routes::execution::router())
        .merge(routes::functions::router())
        .merge(openapi::router())
        .layer(from_fn(auth::auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum::Extension(auth))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — 200 when the application can serve.
async fn readiness() -> &'static str {
    "ready"
}
