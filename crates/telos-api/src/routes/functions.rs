//! # Function Routes
//!
//! Read-only listing and export of the loaded function definitions:
//!
//! - `GET /v1/functions` — all definitions in the tool-calling shape
//! - `GET /v1/functions/names` — just the names
//! - `GET /v1/functions/{name}` — one exported definition
//! - `GET /v1/functions/{name}/schema` — the declared response schema

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use indexmap::IndexMap;
use telos_schema::export_definition;

use crate::error::AppError;
use crate::state::AppState;

/// Build the functions router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/functions", get(list_functions))
        .route("/v1/functions/names", get(list_names))
        .route("/v1/functions/:name", get(function_definition))
        .route("/v1/functions/:name/schema", get(function_schema))
}

/// GET /v1/functions — list all definitions, exported as JSON Schema.
#[utoipa::path(
    get,
    path = "/v1/functions",
    responses(
        (status = 200, description = "Exported definitions"),
    ),
    tag = "functions"
)]
pub(crate) async fn list_functions(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    let definitions = state.orchestrator.list()?;
    Ok(Json(definitions.iter().map(export_definition).collect()))
}

/// GET /v1/functions/names — list the names of all definitions.
#[utoipa::path(
    get,
    path = "/v1/functions/names",
    responses(
        (status = 200, description = "Function names"),
    ),
    tag = "functions"
)]
pub(crate) async fn list_names(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let definitions = state.orchestrator.list()?;
    Ok(Json(
        definitions
            .iter()
            .map(|definition| definition.name().to_string())
            .collect(),
    ))
}

/// GET /v1/functions/{name} — one definition, exported as JSON Schema.
#[utoipa::path(
    get,
    path = "/v1/functions/{name}",
    params(("name" = String, Path, description = "Function name")),
    responses(
        (status = 200, description = "Exported definition"),
        (status = 404, description = "Function not found", body = crate::error::ErrorBody),
    ),
    tag = "functions"
)]
pub(crate) async fn function_definition(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let definition = state.orchestrator.definition(&name)?;
    Ok(Json(export_definition(&definition)))
}

/// GET /v1/functions/{name}/schema — the declared response schema.
#[utoipa::path(
    get,
    path = "/v1/functions/{name}/schema",
    params(("name" = String, Path, description = "Function name")),
    responses(
        (status = 200, description = "Response schema, in declaration order"),
        (status = 404, description = "Function not found", body = crate::error::ErrorBody),
    ),
    tag = "functions"
)]
pub(crate) async fn function_schema(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<IndexMap<String, String>>, AppError> {
    let definition = state.orchestrator.definition(&name)?;
    Ok(Json(definition.response().to_raw()))
}
