// src/presentation/http/controllers/tags.rs
use crate::application::dto::TagListView;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/tags",
    responses((status = 200, description = "All tags, alphabetical.", body = TagListView)),
    security(()),
    tag = "Tags"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<TagListView>> {
    state
        .services
        .tag_queries
        .list_tags(&state.context())
        .await
        .into_http()
        .map(Json)
}
