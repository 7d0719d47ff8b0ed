// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// `Unauthorized` when the password does not match.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Stateless bearer tokens: nothing is stored per token, so a token stays
/// valid until it expires.
#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// `Unauthorized` for malformed, forged or expired tokens.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
