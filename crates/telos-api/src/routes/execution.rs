//! # Execution Route
//!
//! `POST /v1/execution/{name}` — run one function with a JSON object
//! of arguments (body optional; an absent body means no arguments).
//!
//! The response is always the engine's envelope, served at the
//! envelope's own status code: 200 on success, 400 for input-schema
//! violations, 500 for unknown-function, resolution, execution, and
//! output-schema failures.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use telos_core::Value;
use telos_engine::Invocation;

use crate::state::AppState;

/// Build the execution router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/execution/:name", post(execute))
}

/// POST /v1/execution/{name} — invoke a function.
#[utoipa::path(
    post,
    path = "/v1/execution/{name}",
    params(("name" = String, Path, description = "Function name")),
    responses(
        (status = 200, description = "Invocation succeeded"),
        (status = 400, description = "Arguments do not match the declared schema"),
        (status = 500, description = "Unknown function, resolution, execution, or output failure"),
    ),
    tag = "execution"
)]
pub(crate) async fn execute(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Option<Json<BTreeMap<String, Value>>>,
) -> (StatusCode, Json<Invocation>) {
    let raw_args = body.map(|Json(args)| args).unwrap_or_default();
    let envelope = state.orchestrator.invoke(&name, &raw_args);
    let status =
        StatusCode::from_u16(envelope.status.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope))
}
