// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{AddCommentCommand, DeleteCommentCommand},
    dto::{CommentListView, CommentView},
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewComment {
    pub body: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub comment: NewComment,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: CommentView,
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Comments, newest first.", body = CommentListView),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<CommentListView>> {
    state
        .services
        .comment_queries
        .list_comments(&state.context(), viewer.as_ref(), ListCommentsQuery { slug })
        .await
        .into_http()
        .map(|comments| Json(CommentListView { comments }))
}

#[utoipa::path(
    post,
    path = "/api/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = AddCommentRequest,
    responses(
        (status = 200, description = "Comment created.", body = CommentResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Blank body.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
    payload: Result<Json<AddCommentRequest>, JsonRejection>,
) -> HttpResult<Json<CommentResponse>> {
    let Json(AddCommentRequest { comment }) = payload?;
    let command = AddCommentCommand {
        slug,
        body: comment.body,
    };

    state
        .services
        .comment_commands
        .add_comment(&state.context(), &actor, command)
        .await
        .into_http()
        .map(|comment| Json(CommentResponse { comment }))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{slug}/comments/{id}",
    params(
        ("slug" = String, Path, description = "Article slug"),
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment deleted."),
        (status = 403, description = "Not the comment's author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article or comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path((slug, comment_id)): Path<(String, i64)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(
            &state.context(),
            &actor,
            DeleteCommentCommand { slug, comment_id },
        )
        .await
        .into_http()?;

    Ok(StatusCode::OK)
}
