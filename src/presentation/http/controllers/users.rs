// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand, UpdateUserCommand},
    dto::UserDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub user: RegisterUser,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub user: LoginUser,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub user: UpdateUser,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: UserDto,
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created.", body = UserResponse),
        (status = 409, description = "Email or username taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> HttpResult<Json<UserResponse>> {
    let Json(RegisterRequest { user }) = payload?;
    let command = RegisterUserCommand {
        username: user.username,
        email: user.email,
        password: user.password,
    };

    state
        .services
        .user_commands
        .register(&state.context(), command)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated.", body = UserResponse),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Users"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> HttpResult<Json<UserResponse>> {
    let Json(LoginRequest { user }) = payload?;
    let command = LoginUserCommand {
        email: user.email,
        password: user.password,
    };

    state
        .services
        .user_commands
        .login(&state.context(), command)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "The authenticated user.", body = UserResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn current_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .user_queries
        .current_user(&state.context(), &actor)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

#[utoipa::path(
    put,
    path = "/api/user",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user.", body = UserResponse),
        (status = 409, description = "Email or username taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> HttpResult<Json<UserResponse>> {
    let Json(UpdateUserRequest { user }) = payload?;
    let command = UpdateUserCommand {
        email: user.email,
        username: user.username,
        password: user.password,
        bio: user.bio,
        image: user.image,
    };

    state
        .services
        .user_commands
        .update_user(&state.context(), &actor, command)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}
