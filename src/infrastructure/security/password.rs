use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with the crate defaults. Hashing runs on the blocking pool.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

fn hash_blocking(password: &str) -> ApplicationResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn verify_blocking(password: &str, expected_hash: &str) -> ApplicationResult<()> {
    let parsed = PasswordHash::new(expected_hash)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| ApplicationError::unauthorized("password mismatch"))
}

async fn on_blocking_pool<T, F>(job: F) -> ApplicationResult<T>
where
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        on_blocking_pool(move || hash_blocking(&password)).await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        on_blocking_pool(move || verify_blocking(&password, &expected_hash)).await
    }
}
