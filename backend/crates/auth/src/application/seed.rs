//! Default Credential Seeding
//!
//! Idempotent bootstrap step run once at process startup: if the
//! credential table is empty, create the default user. Not a general
//! registration flow.

use std::sync::Arc;

use platform::password::{self, ClearTextPassword};

use crate::domain::repository::CredentialRepository;
use crate::error::AuthResult;

/// Default username seeded on first boot
pub const DEFAULT_USERNAME: &str = "invitado";

/// Default password seeded on first boot
pub const DEFAULT_PASSWORD: &str = "password";

/// Seed-default-credential use case
pub struct SeedDefaultCredentialUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
}

impl<R> SeedDefaultCredentialUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns `true` if a credential was created, `false` if one
    /// already existed.
    pub async fn execute(&self) -> AuthResult<bool> {
        if self.repo.any().await? {
            return Ok(false);
        }

        let salt = password::generate_salt();
        let hash = password::digest(&ClearTextPassword::new(DEFAULT_PASSWORD.to_string()), &salt);

        let credential = self.repo.insert(DEFAULT_USERNAME, &salt, &hash).await?;

        tracing::info!(username = %credential.username, "Seeded default credential");

        Ok(true)
    }
}
