//! Platform - Cryptographic building blocks
//!
//! Domain-independent primitives shared by the backend crates:
//! - `crypto` - random bytes, base64, constant-shape comparison
//! - `password` - salted HMAC-SHA512 credential digests
//! - `token` - compact signed bearer tokens (HS512)

pub mod crypto;
pub mod password;
pub mod token;
