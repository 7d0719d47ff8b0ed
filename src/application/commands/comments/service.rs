use std::sync::Arc;

use crate::{
    application::{
        context::RequestContext,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        projection::Projector,
    },
    domain::{
        article::{Article, ArticleReadRepository, ArticleSlug},
        comment::CommentRepository,
    },
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) projector: Arc<Projector>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        projector: Arc<Projector>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            projector,
            clock,
        }
    }

    pub(super) async fn find_article(
        &self,
        ctx: &RequestContext,
        slug: String,
    ) -> ApplicationResult<Article> {
        let slug =
            ArticleSlug::new(slug).map_err(|_| ApplicationError::not_found("article not found"))?;
        ctx.run(self.article_repo.find_by_slug(&slug))
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
