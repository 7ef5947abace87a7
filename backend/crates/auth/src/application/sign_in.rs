//! Sign In Use Case
//!
//! Verifies a password credential and issues an identity-bearing token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::{self, TokenIdentity};

use crate::application::config::AuthConfig;
use crate::domain::repository::CredentialRepository;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed bearer token
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let credential = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password);
        let valid = platform::password::verify(
            &password,
            &credential.password_salt,
            &credential.password_hash,
        );

        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = TokenIdentity {
            user_id: credential.id.value(),
            username: credential.username.clone(),
        };

        let token = token::issue(
            Some(&identity),
            &self.config.token_secret,
            self.config.token_lifetime_days,
        );

        tracing::info!(username = %credential.username, "User signed in");

        Ok(SignInOutput { token })
    }
}
