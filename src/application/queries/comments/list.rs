use super::CommentQueryService;
use crate::{
    application::{
        context::RequestContext,
        dto::{AuthenticatedUser, CommentView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct ListCommentsQuery {
    pub slug: String,
}

impl CommentQueryService {
    /// Newest first.
    pub async fn list_comments(
        &self,
        ctx: &RequestContext,
        viewer: Option<&AuthenticatedUser>,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentView>> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = ctx
            .run(self.article_repo.find_by_slug(&slug))
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let comments = ctx
            .run(self.comment_repo.list_by_article(article.id))
            .await?;

        let viewer = viewer.map(|viewer| viewer.id);
        let mut views = Vec::with_capacity(comments.len());
        for comment in comments {
            views.push(self.projector.comment(ctx, comment, viewer).await?);
        }
        Ok(views)
    }
}
