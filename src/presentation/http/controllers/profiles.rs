// src/presentation/http/controllers/profiles.rs
use crate::application::{
    commands::profiles::FollowProfileCommand, dto::ProfileView, queries::profiles::GetProfileQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: ProfileView,
}

#[utoipa::path(
    get,
    path = "/api/profiles/{username}",
    params(("username" = String, Path, description = "Profile username")),
    responses(
        (status = 200, description = "Profile as seen by the caller.", body = ProfileResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .profile_queries
        .get_profile(&state.context(), viewer.as_ref(), GetProfileQuery { username })
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}

#[utoipa::path(
    post,
    path = "/api/profiles/{username}/follow",
    params(("username" = String, Path, description = "User to follow")),
    responses(
        (status = 200, description = "Now following.", body = ProfileResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Attempt to follow yourself.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Profiles"
)]
pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .profile_commands
        .follow(&state.context(), &actor, FollowProfileCommand { username })
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}

#[utoipa::path(
    delete,
    path = "/api/profiles/{username}/follow",
    params(("username" = String, Path, description = "User to unfollow")),
    responses(
        (status = 200, description = "No longer following.", body = ProfileResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Profiles"
)]
pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .profile_commands
        .unfollow(&state.context(), &actor, FollowProfileCommand { username })
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}
