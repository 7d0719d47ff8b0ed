// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::login,
        crate::presentation::http::controllers::users::current_user,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::profiles::get_profile,
        crate::presentation::http::controllers::profiles::follow,
        crate::presentation::http::controllers::profiles::unfollow,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::feed,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::favorite_article,
        crate::presentation::http::controllers::articles::unfavorite_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::add_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::tags::list_tags,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::users::RegisterRequest,
            crate::presentation::http::controllers::users::LoginRequest,
            crate::presentation::http::controllers::users::UpdateUserRequest,
            crate::presentation::http::controllers::users::UserResponse,
            crate::presentation::http::controllers::profiles::ProfileResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::ArticleResponse,
            crate::presentation::http::controllers::comments::AddCommentRequest,
            crate::presentation::http::controllers::comments::CommentResponse,
            crate::application::dto::UserDto,
            crate::application::dto::ProfileView,
            crate::application::dto::ArticleView,
            crate::application::dto::ArticleListView,
            crate::application::dto::CommentView,
            crate::application::dto::CommentListView,
            crate::application::dto::TagListView
        )
    ),
    tags(
        (name = "Users", description = "Registration, login and the current account"),
        (name = "Profiles", description = "Public profiles and follow edges"),
        (name = "Articles", description = "Articles, listings and the follow feed"),
        (name = "Favorites", description = "Favorite toggles"),
        (name = "Comments", description = "Article comments"),
        (name = "Tags", description = "Tag vocabulary"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Quill API",
        description = "Social publishing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        http.description =
            Some("`Authorization: Bearer <token>`; the `Token <token>` scheme is accepted too".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/users",
            "/api/users/login",
            "/api/user",
            "/api/profiles/{username}",
            "/api/profiles/{username}/follow",
            "/api/articles",
            "/api/articles/feed",
            "/api/articles/{slug}",
            "/api/articles/{slug}/favorite",
            "/api/articles/{slug}/comments",
            "/api/articles/{slug}/comments/{id}",
            "/api/tags",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
