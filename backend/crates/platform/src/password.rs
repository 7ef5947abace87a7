//! Password Hashing and Verification
//!
//! Salted HMAC-SHA512 credential digests:
//! - A per-user random salt doubles as the HMAC key
//! - The digest is the keyed hash of the UTF-8 password
//! - Verification recomputes and compares the full digest length
//!
//! ## Security Notes
//! - No early exit in the comparison loop beyond the unavoidable
//!   length check
//! - Clear text passwords are zeroized on drop and redacted in Debug

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, hmac_sha512, random_bytes};

/// Salt length in bytes
///
/// HMAC-SHA512 keys longer than the block size get pre-hashed, so the
/// salt matches the block size exactly.
pub const SALT_LENGTH: usize = 128;

/// Digest length in bytes (SHA-512 output)
pub const DIGEST_LENGTH: usize = 64;

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`; Debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Generate a fresh random salt
pub fn generate_salt() -> Vec<u8> {
    random_bytes(SALT_LENGTH)
}

/// Compute the credential digest for a password under a salt
///
/// Pure function of its inputs; the same `(password, salt)` pair always
/// produces the same digest.
pub fn digest(password: &ClearTextPassword, salt: &[u8]) -> Vec<u8> {
    hmac_sha512(salt, password.as_bytes())
}

/// Verify a password against a stored digest
///
/// Recomputes the digest and compares every byte. A stored digest of a
/// different length only occurs if it was written by a different
/// algorithm; that is treated as a mismatch, not a panic.
pub fn verify(password: &ClearTextPassword, salt: &[u8], expected: &[u8]) -> bool {
    let computed = digest(password, salt);
    constant_time_eq(&computed, expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pw(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string())
    }

    #[test]
    fn test_salt_length() {
        let salt = generate_salt();
        assert_eq!(salt.len(), SALT_LENGTH);
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_digest_deterministic() {
        let salt = generate_salt();
        assert_eq!(digest(&pw("password"), &salt), digest(&pw("password"), &salt));
        assert_eq!(digest(&pw("password"), &salt).len(), DIGEST_LENGTH);
    }

    #[test]
    fn test_digest_depends_on_salt() {
        let a = digest(&pw("password"), &generate_salt());
        let b = digest(&pw("password"), &generate_salt());
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_roundtrip() {
        let salt = generate_salt();
        let stored = digest(&pw("contraseña"), &salt);

        assert!(verify(&pw("contraseña"), &salt, &stored));
        assert!(!verify(&pw("otra"), &salt, &stored));
    }

    #[test]
    fn test_verify_wrong_salt() {
        let salt = generate_salt();
        let stored = digest(&pw("password"), &salt);
        assert!(!verify(&pw("password"), &generate_salt(), &stored));
    }

    #[test]
    fn test_verify_length_mismatch_is_false() {
        let salt = generate_salt();
        let stored = digest(&pw("password"), &salt);
        assert!(!verify(&pw("password"), &salt, &stored[..32]));
        assert!(!verify(&pw("password"), &salt, &[]));
    }

    #[test]
    fn test_debug_redaction() {
        let password = pw("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
