// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use quill_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use quill_core::domain::user::UserId;

/// Always rejected, as if its lifetime had run out.
pub const EXPIRED_TOKEN: &str = "expired-token";

const TOKEN_PREFIX: &str = "token";
const HASH_PREFIX: &str = "hashed:";

/* -------------------------------- TokenManager -------------------------------- */

/// Issues `token-<id>-<username>` and accepts exactly those strings back.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

impl DummyTokenManager {
    pub fn token_for(user_id: i64, username: &str) -> String {
        format!("{TOKEN_PREFIX}-{user_id}-{username}")
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: Self::token_for(subject.user_id.0, &subject.username),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        if token == EXPIRED_TOKEN {
            return Err(ApplicationError::unauthorized("expired token"));
        }

        let parsed = token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|rest| rest.split_once('-'))
            .and_then(|(id, username)| Some((id.parse::<i64>().ok()?, username)));

        match parsed {
            Some((id, username)) if !username.is_empty() => {
                let issued_at = super::time::fixed_now();
                Ok(AuthenticatedUser {
                    id: UserId::new(id).map_err(|_| ApplicationError::unauthorized("bad id"))?,
                    username: username.to_string(),
                    issued_at,
                    expires_at: issued_at + Duration::hours(1),
                })
            }
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Reversible "hash" so tests can check which password was stored.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{HASH_PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("{HASH_PREFIX}{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("bad password"))
        }
    }
}
