//! # OpenAPI Document Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Telos API",
        description = "Validation and execution of declaratively defined functions.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::execution::execute,
        crate::routes::functions::list_functions,
        crate::routes::functions::list_names,
        crate::routes::functions::function_definition,
        crate::routes::functions::function_schema,
    ),
    components(schemas(crate::error::ErrorBody, crate::error::ErrorDetail)),
    tags(
        (name = "execution", description = "Function invocation"),
        (name = "functions", description = "Definition listing and export"),
    )
)]
struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — the assembled OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
