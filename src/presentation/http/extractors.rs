// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl MaybeAuthenticated {
    pub fn as_ref(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

/// Accepts both `Bearer <token>` and the `Token <token>` scheme.
fn raw_token(parts: &Parts) -> Result<Option<String>, HttpError> {
    if let Some(Authorization(bearer)) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Ok(Some(bearer.token().to_string()));
    }

    let Some(value) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| {
        HttpError::from_error(ApplicationError::unauthorized(
            "invalid authorization header format",
        ))
    })?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("token") && !token.trim().is_empty() => {
            Ok(Some(token.trim().to_string()))
        }
        _ => Err(HttpError::from_error(ApplicationError::unauthorized(
            "invalid authorization header format",
        ))),
    }
}

async fn authenticate<S>(parts: &mut Parts, state: &S) -> Result<Option<AuthenticatedUser>, HttpError>
where
    S: Send + Sync,
{
    let Some(token) = raw_token(parts)? else {
        return Ok(None);
    };

    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;

    let user = app_state
        .services
        .token_manager()
        .authenticate(&token)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::unauthorized("invalid or expired token"))
        })?;

    Ok(Some(user))
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts, state)
            .await?
            .map(Self)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized("authentication required"))
            })
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).await.map(Self)
    }
}
