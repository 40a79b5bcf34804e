//! # Authentication Middleware
//!
//! Static bearer-token auth. When no key is configured the middleware
//! passes everything through — local development runs open. Token
//! comparison is constant-time via `subtle`, so the comparison itself
//! leaks nothing about the configured key.

use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::error::AppError;

/// A secret token with a redacting `Debug` so keys never reach logs.
#[derive(Clone)]
pub struct SecretToken(String);

impl SecretToken {
    /// Wrap a token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Constant-time comparison against a presented token.
    pub fn matches(&self, presented: &str) -> bool {
        self.0.as_bytes().ct_eq(presented.as_bytes()).into()
    }
}

impl std::fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretToken(..)")
    }
}

/// Auth configuration injected into request extensions by `app()`.
#[derive(Debug, Clone)]
pub struct AuthLayerConfig {
    /// The configured key; `None` disables auth.
    pub api_key: Option<SecretToken>,
}

/// Reject requests that lack a valid `Authorization: Bearer` token
/// whenever a key is configured.
pub async fn auth_middleware(request: Request, next: Next) -> Response {
    let config = request.extensions().get::<AuthLayerConfig>().cloned();

    let Some(AuthLayerConfig {
        api_key: Some(expected),
    }) = config
    else {
        return next.run(request).await;
    };

    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match presented {
        Some(token) if expected.matches(token) => next.run(request).await,
        Some(_) => AppError::Unauthorized("invalid API key".to_string()).into_response(),
        None => AppError::Unauthorized("missing bearer token".to_string()).into_response(),
    }
}
