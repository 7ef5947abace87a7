//! Auth Middleware
//!
//! Middleware for requiring a valid bearer token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct BearerAuthState {
    pub config: Arc<AuthConfig>,
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Middleware that requires a valid signed bearer token
///
/// Signature and expiry are checked; identity claims are optional
/// (anonymous tokens pass). Decoded claims are made available to
/// downstream handlers through request extensions.
pub async fn require_bearer_token(
    State(state): State<BearerAuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer_token(&req) {
        Some(token) => token,
        None => return Err(AuthError::MissingToken.into_response()),
    };

    let claims = match platform::token::decode(token, &state.config.token_secret) {
        Ok(claims) => claims,
        Err(e) => return Err(AuthError::InvalidToken(e).into_response()),
    };

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
