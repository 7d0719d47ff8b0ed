// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

use super::claims::parse_claims;

const TOKEN_CODE: &str = r#"
    user({uid}, {uname});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
"#;

/// Token checks carry the actual constraints; the policy only lets them run.
const ALLOW_VALID: &str = "allow if true;";

/// Ed25519-signed biscuit tokens carrying the user and a validity window.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }

    fn mint(
        &self,
        subject: &TokenSubject,
        issued_at: SystemTime,
        expires_at: SystemTime,
    ) -> ApplicationResult<String> {
        let mut params: HashMap<String, Term> = HashMap::new();
        params.insert("uid".to_string(), i64::from(subject.user_id).into());
        params.insert("uname".to_string(), subject.username.clone().into());
        params.insert("issued".to_string(), issued_at.into());
        params.insert("exp".to_string(), expires_at.into());

        let token = Biscuit::builder()
            .code_with_params(TOKEN_CODE, params, HashMap::new())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(self.root.as_ref())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        token
            .seal()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .to_base64()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let token = self.mint(&subject, issued_at, expires_at)?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        // Runs the time checks embedded in the token.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code(ALLOW_VALID)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();

        parse_claims(facts)
    }
}
