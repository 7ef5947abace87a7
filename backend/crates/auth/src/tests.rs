//! Unit tests for the auth crate

use std::sync::{Arc, Mutex};

use crate::application::config::AuthConfig;
use crate::application::seed::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use crate::application::{
    AnonymousTokenUseCase, SeedDefaultCredentialUseCase, SignInInput, SignInUseCase,
};
use crate::domain::entity::Credential;
use crate::domain::repository::CredentialRepository;
use crate::error::{AuthError, AuthResult};
use kernel::id::CredentialId;

/// In-memory credential repository for use-case tests
#[derive(Clone, Default)]
struct InMemoryCredentials {
    rows: Arc<Mutex<Vec<Credential>>>,
}

impl CredentialRepository for InMemoryCredentials {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Credential>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.username == username).cloned())
    }

    async fn any(&self) -> AuthResult<bool> {
        Ok(!self.rows.lock().unwrap().is_empty())
    }

    async fn insert(&self, username: &str, salt: &[u8], hash: &[u8]) -> AuthResult<Credential> {
        let mut rows = self.rows.lock().unwrap();
        let credential = Credential {
            id: CredentialId::new(rows.len() as i64 + 1),
            username: username.to_string(),
            password_salt: salt.to_vec(),
            password_hash: hash.to_vec(),
        };
        rows.push(credential.clone());
        Ok(credential)
    }
}

fn config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::with_random_secret())
}

mod seed_tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_creates_default_credential() {
        let repo = Arc::new(InMemoryCredentials::default());
        let seed = SeedDefaultCredentialUseCase::new(repo.clone());

        assert!(seed.execute().await.unwrap());

        let rows = repo.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].username, DEFAULT_USERNAME);
        assert_eq!(rows[0].password_salt.len(), platform::password::SALT_LENGTH);
        assert_eq!(rows[0].password_hash.len(), platform::password::DIGEST_LENGTH);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repo = Arc::new(InMemoryCredentials::default());
        let seed = SeedDefaultCredentialUseCase::new(repo.clone());

        assert!(seed.execute().await.unwrap());
        assert!(!seed.execute().await.unwrap());
        assert!(!seed.execute().await.unwrap());

        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }
}

mod sign_in_tests {
    use super::*;

    async fn seeded_repo() -> Arc<InMemoryCredentials> {
        let repo = Arc::new(InMemoryCredentials::default());
        SeedDefaultCredentialUseCase::new(repo.clone())
            .execute()
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_sign_in_with_valid_credentials() {
        let repo = seeded_repo().await;
        let config = config();
        let use_case = SignInUseCase::new(repo, config.clone());

        let output = use_case
            .execute(SignInInput {
                username: DEFAULT_USERNAME.to_string(),
                password: DEFAULT_PASSWORD.to_string(),
            })
            .await
            .unwrap();

        assert!(!output.token.is_empty());

        // Claims decode to the matching identity
        let claims = platform::token::decode(&output.token, &config.token_secret).unwrap();
        assert_eq!(claims.nameid.as_deref(), Some("1"));
        assert_eq!(claims.unique_name.as_deref(), Some(DEFAULT_USERNAME));
    }

    #[tokio::test]
    async fn test_sign_in_with_wrong_password() {
        let repo = seeded_repo().await;
        let use_case = SignInUseCase::new(repo, config());

        let result = use_case
            .execute(SignInInput {
                username: DEFAULT_USERNAME.to_string(),
                password: "incorrecta".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_sign_in_with_unknown_user() {
        let repo = seeded_repo().await;
        let use_case = SignInUseCase::new(repo, config());

        let result = use_case
            .execute(SignInInput {
                username: "desconocido".to_string(),
                password: DEFAULT_PASSWORD.to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}

mod anonymous_token_tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        let use_case = AnonymousTokenUseCase::new(config());
        assert!(matches!(
            use_case.execute(),
            Err(AuthError::AnonymousTokensDisabled)
        ));
    }

    #[test]
    fn test_enabled_issues_anonymous_token() {
        let config = Arc::new(AuthConfig {
            anonymous_tokens: true,
            ..AuthConfig::with_random_secret()
        });
        let use_case = AnonymousTokenUseCase::new(config.clone());

        let token = use_case.execute().unwrap();
        let claims = platform::token::decode(&token, &config.token_secret).unwrap();
        assert!(claims.is_anonymous());
    }
}

mod error_tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::MissingToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidToken(platform::token::TokenError::Expired).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::AnonymousTokensDisabled.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AuthError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
