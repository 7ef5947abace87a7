//! Domain Entities

use kernel::id::CredentialId;

/// Login credential - a user identity with its password digest material
///
/// Created once at bootstrap if no credential exists; never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: CredentialId,
    /// Unique username
    pub username: String,
    /// Per-user random salt (HMAC key)
    pub password_salt: Vec<u8>,
    /// HMAC-SHA512 digest of the password under the salt
    pub password_hash: Vec<u8>,
}
