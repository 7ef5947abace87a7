//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric signing secret for bearer tokens
    pub token_secret: Vec<u8>,
    /// Token lifetime in days
    pub token_lifetime_days: i64,
    /// Whether `GET /api/auth` issues anonymous tokens without any
    /// credential check
    pub anonymous_tokens: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            token_lifetime_days: 1,
            anonymous_tokens: false,
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development (anonymous tokens enabled)
    pub fn development() -> Self {
        Self {
            anonymous_tokens: true,
            ..Self::with_random_secret()
        }
    }
}
