//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::Credential;
use crate::error::AuthResult;

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find a credential by its unique username
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Credential>>;

    /// Whether any credential exists at all (seeding guard)
    async fn any(&self) -> AuthResult<bool>;

    /// Insert a new credential, returning it with its assigned id
    async fn insert(&self, username: &str, salt: &[u8], hash: &[u8]) -> AuthResult<Credential>;
}
