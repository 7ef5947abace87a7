//! Anonymous Token Use Case
//!
//! Issues a token with no identity claims and no credential check.
//! Gated by configuration; a materially weaker authentication posture
//! than sign-in, intended for open deployments only.

use std::sync::Arc;

use platform::token;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Anonymous token use case
pub struct AnonymousTokenUseCase {
    config: Arc<AuthConfig>,
}

impl AnonymousTokenUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> AuthResult<String> {
        if !self.config.anonymous_tokens {
            return Err(AuthError::AnonymousTokensDisabled);
        }

        let token = token::issue(
            None,
            &self.config.token_secret,
            self.config.token_lifetime_days,
        );

        tracing::info!("Issued anonymous token");

        Ok(token)
    }
}
