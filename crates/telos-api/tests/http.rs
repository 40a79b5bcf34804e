//! # Integration Tests for telos-api
//!
//! Tests the execution envelope contract, the functions listing routes,
//! health probes, bearer auth, and OpenAPI generation. Everything runs
//! against an in-memory store so no filesystem setup is needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use telos_api::auth::SecretToken;
use telos_api::state::AppState;
use telos_engine::{MemoryStore, Orchestrator};
use telos_registry::Registry;
use telos_schema::FunctionDefinition;

fn definition(document: serde_json::Value) -> FunctionDefinition {
    serde_json::from_value(document).unwrap()
}

fn test_store() -> MemoryStore {
    // The stats response declares "size" before "count" — not the
    // alphabetical order — so order-sensitive assertions below cannot
    // pass by accident. Parsed from a document string because a
    // serde_json::Value round trip re-sorts object keys.
    let stats: FunctionDefinition = serde_json::from_str(
        r#"{
            "name": "stats",
            "description": "Character and word counts for a text.",
            "parameters": [{"name": "text", "type": "text"}],
            "reference": "text.stats",
            "response": {"size": "integer", "count": "integer"}
        }"#,
    )
    .unwrap();
    [
        definition(json!({
            "name": "salute",
            "description": "Say hello to someone.",
            "parameters": [{"name": "who", "type": "text"}],
            "reference": "demo.salute",
            "response": {"msg": "text"},
        })),
        stats,
    ]
    .into_iter()
    .collect()
}

fn test_state(api_key: Option<SecretToken>) -> AppState {
    let store = Arc::new(test_store());
    let registry = Arc::new(Registry::with_builtins());
    AppState::new(Arc::new(Orchestrator::new(store, registry)), api_key)
}

/// Helper: build the test app with auth disabled.
fn test_app() -> axum::Router {
    telos_api::app(test_state(None))
}

/// Helper: build the test app with a configured API key.
fn test_app_with_auth(key: &str) -> axum::Router {
    telos_api::app(test_state(Some(SecretToken::new(key))))
}

/// Helper: read response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Execution Envelope --------------------------------------------------------

#[tokio::test]
async fn test_execute_success_envelope() {
    let response = test_app()
        .oneshot(post_json("/v1/execution/salute", json!({"who": "Ada"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "status": {"code": 200, "message": "Success"},
            "data": {"msg": "Hello, Ada! o7"},
        })
    );
}

#[tokio::test]
async fn test_execute_missing_argument_returns_400() {
    let response = test_app()
        .oneshot(post_json("/v1/execution/salute", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"]["code"], 400);
    assert_eq!(body["data"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_execute_unknown_argument_returns_400() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/execution/salute",
            json!({"who": "Ada", "shout": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["status"]["message"]
        .as_str()
        .unwrap()
        .contains("shout"));
}

#[tokio::test]
async fn test_execute_unknown_function_returns_500_envelope() {
    let response = test_app()
        .oneshot(post_json("/v1/execution/nonesuch", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["status"]["code"], 500);
    assert_eq!(body["data"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_execute_without_body_uses_empty_arguments() {
    // salute requires `who`, so an absent body fails input validation,
    // not JSON parsing.
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/execution/salute")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_execute_multi_entry_response() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/execution/stats",
            json!({"text": "one two three"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // First declared output binds the first positional value.
    assert_eq!(body["data"]["size"], 13);
    assert_eq!(body["data"]["count"], 3);
}

// -- Functions Listing ---------------------------------------------------------

#[tokio::test]
async fn test_list_functions_exports_definitions() {
    let response = test_app().oneshot(get("/v1/functions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let exported = body.as_array().unwrap();
    assert_eq!(exported.len(), 2);
    assert_eq!(exported[0]["name"], "salute");
    assert_eq!(exported[0]["parameters"]["type"], "object");
    assert_eq!(
        exported[0]["parameters"]["properties"]["who"]["type"],
        "string"
    );
    assert_eq!(exported[0]["parameters"]["required"], json!(["who"]));
}

#[tokio::test]
async fn test_list_names() {
    let response = test_app().oneshot(get("/v1/functions/names")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!(["salute", "stats"]));
}

#[tokio::test]
async fn test_function_definition_not_found() {
    let response = test_app()
        .oneshot(get("/v1/functions/nonesuch"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 404);
}

#[tokio::test]
async fn test_function_schema_preserves_declaration_order() {
    let response = test_app()
        .oneshot(get("/v1/functions/stats/schema"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // `size` was declared before `count`; alphabetical order would
    // serialize `count` first.
    assert_eq!(
        String::from_utf8(bytes.to_vec()).unwrap(),
        r#"{"size":"integer","count":"integer"}"#
    );
}

// -- Authentication ------------------------------------------------------------

#[tokio::test]
async fn test_auth_rejects_missing_token() {
    let response = test_app_with_auth("k3y")
        .oneshot(get("/v1/functions"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_rejects_wrong_token() {
    let response = test_app_with_auth("k3y")
        .oneshot(
            Request::builder()
                .uri("/v1/functions")
                .header("authorization", "Bearer wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_accepts_valid_token() {
    let response = test_app_with_auth("k3y")
        .oneshot(
            Request::builder()
                .uri("/v1/functions")
                .header("authorization", "Bearer k3y")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_probes_skip_auth() {
    let response = test_app_with_auth("k3y")
        .oneshot(get("/health/liveness"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- OpenAPI -------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_document() {
    let response = test_app().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["info"]["title"], "Telos API");
    assert!(body["paths"]
        .as_object()
        .unwrap()
        .contains_key("/v1/execution/{name}"));
}
