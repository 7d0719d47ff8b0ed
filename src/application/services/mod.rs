// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            profiles::ProfileCommandService, users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        projection::Projector,
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            profiles::ProfileQueryService, tags::TagQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        comment::CommentRepository,
        favorite::FavoriteRepository,
        follow::FollowRepository,
        tag::TagRepository,
        user::UserRepository,
    },
};

/// Storage adapters the application needs, one per aggregate.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub follows: Arc<dyn FollowRepository>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub tag_queries: Arc<TagQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let projector = Arc::new(Projector::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.tags),
            Arc::clone(&repos.favorites),
            Arc::clone(&repos.follows),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&token_manager),
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.follows),
            Arc::clone(&projector),
        ));
        let profile_queries = Arc::new(ProfileQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&projector),
        ));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_writes),
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.tags),
            Arc::clone(&repos.favorites),
            slug_service,
            Arc::clone(&projector),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&projector),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_reads),
            Arc::clone(&projector),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_reads),
            Arc::clone(&projector),
        ));

        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&repos.tags)));

        Self {
            user_commands,
            user_queries,
            profile_commands,
            profile_queries,
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            tag_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
