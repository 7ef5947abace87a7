//! Bearer Token Issuance and Verification
//!
//! Compact signed tokens in the JWS layout (`header.payload.signature`,
//! unpadded URL-safe base64 segments) with an HMAC-SHA512 signature over
//! `header.payload`, keyed by a symmetric secret.
//!
//! Two issuance modes:
//! - identity-bearing: claims carry the subject id (`nameid`) and
//!   username (`unique_name`)
//! - anonymous: no identity claims at all, only the expiry
//!
//! Verification covers signature and expiry only; there is no issuer or
//! audience validation.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::{constant_time_eq, from_base64url, hmac_sha512, to_base64url};

/// Fixed JOSE header for all issued tokens
const HEADER: &str = r#"{"alg":"HS512","typ":"JWT"}"#;

/// Token verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token is not three base64url segments of valid JSON
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token expiry is in the past
    #[error("Token has expired")]
    Expired,
}

/// Subject identity embedded in identity-bearing tokens
#[derive(Debug, Clone)]
pub struct TokenIdentity {
    pub user_id: i64,
    pub username: String,
}

/// Token claims
///
/// Claim names follow the compact JWT forms of the standard identity
/// claims (`nameid` for the subject id, `unique_name` for the name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    /// Expiry as Unix seconds
    pub exp: i64,
}

impl Claims {
    /// Whether the token carries a subject identity
    pub fn is_anonymous(&self) -> bool {
        self.nameid.is_none() && self.unique_name.is_none()
    }
}

/// Issue a signed token
///
/// With an identity the claims carry `nameid` and `unique_name`; without
/// one the token is anonymous. Expiry is `now + lifetime_days`.
pub fn issue(identity: Option<&TokenIdentity>, secret: &[u8], lifetime_days: i64) -> String {
    let exp = Utc::now().timestamp() + lifetime_days * 86_400;

    let claims = Claims {
        nameid: identity.map(|i| i.user_id.to_string()),
        unique_name: identity.map(|i| i.username.clone()),
        exp,
    };

    let payload = serde_json::to_vec(&claims).expect("claims serialize to JSON");

    let signing_input = format!(
        "{}.{}",
        to_base64url(HEADER.as_bytes()),
        to_base64url(&payload)
    );
    let signature = hmac_sha512(secret, signing_input.as_bytes());

    format!("{}.{}", signing_input, to_base64url(&signature))
}

/// Decode and verify a token, returning its claims
///
/// Checks the signature before touching the payload, then the expiry.
pub fn decode(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    let mut segments = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let signing_input = format!("{}.{}", header, payload);
    let expected = hmac_sha512(secret, signing_input.as_bytes());
    let provided = from_base64url(signature).map_err(|_| TokenError::Malformed)?;

    if !constant_time_eq(&expected, &provided) {
        return Err(TokenError::InvalidSignature);
    }

    let payload = from_base64url(payload).map_err(|_| TokenError::Malformed)?;
    let claims: Claims = serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

    if claims.exp <= Utc::now().timestamp() {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"clave secreta de firma para tests";

    fn identity() -> TokenIdentity {
        TokenIdentity {
            user_id: 1,
            username: "invitado".to_string(),
        }
    }

    #[test]
    fn test_issue_and_decode_identity() {
        let token = issue(Some(&identity()), SECRET, 7);
        assert_eq!(token.split('.').count(), 3);

        let claims = decode(&token, SECRET).unwrap();
        assert_eq!(claims.nameid.as_deref(), Some("1"));
        assert_eq!(claims.unique_name.as_deref(), Some("invitado"));
        assert!(!claims.is_anonymous());
    }

    #[test]
    fn test_issue_and_decode_anonymous() {
        let token = issue(None, SECRET, 7);
        let claims = decode(&token, SECRET).unwrap();
        assert!(claims.is_anonymous());
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_anonymous_payload_has_no_identity_claims() {
        let token = issue(None, SECRET, 7);
        let payload = token.split('.').nth(1).unwrap();
        let json = from_base64url(payload).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert!(value.get("nameid").is_none());
        assert!(value.get("unique_name").is_none());
        assert!(value.get("exp").is_some());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue(Some(&identity()), SECRET, 7);
        assert_eq!(
            decode(&token, b"otro secreto"),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let token = issue(Some(&identity()), SECRET, 7);
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = to_base64url(br#"{"nameid":"99","exp":9999999999}"#);
        parts[1] = &forged;
        let tampered = parts.join(".");
        assert_eq!(
            decode(&tampered, SECRET),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issue(Some(&identity()), SECRET, -1);
        assert_eq!(decode(&token, SECRET), Err(TokenError::Expired));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        assert_eq!(decode("", SECRET), Err(TokenError::Malformed));
        assert_eq!(decode("a.b", SECRET), Err(TokenError::Malformed));
        assert_eq!(decode("a.b.c.d", SECRET), Err(TokenError::Malformed));
        assert_eq!(decode("no base64!!.x.y", SECRET), Err(TokenError::Malformed));
    }

    #[test]
    fn test_header_is_hs512() {
        let token = issue(None, SECRET, 1);
        let header = token.split('.').next().unwrap();
        let json = from_base64url(header).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["alg"], "HS512");
        assert_eq!(value["typ"], "JWT");
    }
}
