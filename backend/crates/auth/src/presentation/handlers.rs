//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{AnonymousTokenUseCase, SignInInput, SignInUseCase};
use crate::domain::repository::CredentialRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, TokenResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// POST /api/auth
///
/// Verifies the credential and returns an identity-bearing token.
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}

/// GET /api/auth
///
/// Issues an anonymous token when enabled in configuration. No
/// credential check at all; the token carries only an expiry.
pub async fn anonymous_token<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<String>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = AnonymousTokenUseCase::new(state.config.clone());

    use_case.execute()
}
