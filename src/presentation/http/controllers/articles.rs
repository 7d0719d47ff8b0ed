// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, FavoriteArticleCommand, UpdateArticleCommand,
    },
    dto::{ArticleListView, ArticleView, PageRequest},
    queries::articles::{FeedQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// `limit` and `offset` stay raw strings; out-of-range or garbage values are
/// normalized rather than rejected.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub article: NewArticle,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub article: ArticleChanges,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: ArticleView,
}

fn article_response(article: ArticleView) -> Json<ArticleResponse> {
    Json(ArticleResponse { article })
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses((status = 200, description = "Newest articles first.", body = ArticleListView)),
    security((), ("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListView>> {
    let query = ListArticlesQuery {
        tag: params.tag,
        author: params.author,
        favorited: params.favorited,
        page: PageRequest {
            limit: params.limit,
            offset: params.offset,
        },
    };

    state
        .services
        .article_queries
        .list_articles(&state.context(), viewer.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/feed",
    params(FeedParams),
    responses(
        (status = 200, description = "Articles by followed authors.", body = ArticleListView),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn feed(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<FeedParams>,
) -> HttpResult<Json<ArticleListView>> {
    let query = FeedQuery {
        page: PageRequest {
            limit: params.limit,
            offset: params.offset,
        },
    };

    state
        .services
        .article_queries
        .feed(&state.context(), &actor, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article.", body = ArticleResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_slug(&state.context(), viewer.as_ref(), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(article_response)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Article created.", body = ArticleResponse),
        (status = 422, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleResponse>> {
    let Json(CreateArticleRequest { article }) = payload?;
    let command = CreateArticleCommand {
        title: article.title,
        description: article.description,
        body: article.body,
        tag_list: article.tag_list,
    };

    state
        .services
        .article_commands
        .create_article(&state.context(), &actor, command)
        .await
        .into_http()
        .map(article_response)
}

#[utoipa::path(
    put,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleResponse),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
    payload: Result<Json<UpdateArticleRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleResponse>> {
    let Json(UpdateArticleRequest { article }) = payload?;
    let command = UpdateArticleCommand {
        slug,
        title: article.title,
        description: article.description,
        body: article.body,
    };

    state
        .services
        .article_commands
        .update_article(&state.context(), &actor, command)
        .await
        .into_http()
        .map(article_response)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article deleted."),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&state.context(), &actor, DeleteArticleCommand { slug })
        .await
        .into_http()?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/articles/{slug}/favorite",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article favorited.", body = ArticleResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn favorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .favorite_article(&state.context(), &actor, FavoriteArticleCommand { slug })
        .await
        .into_http()
        .map(article_response)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{slug}/favorite",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article unfavorited.", body = ArticleResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn unfavorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .unfavorite_article(&state.context(), &actor, FavoriteArticleCommand { slug })
        .await
        .into_http()
        .map(article_response)
}
