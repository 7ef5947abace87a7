//! Auth Application Layer - Use Cases

pub mod anonymous_token;
pub mod config;
pub mod seed;
pub mod sign_in;

pub use anonymous_token::AnonymousTokenUseCase;
pub use seed::SeedDefaultCredentialUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
