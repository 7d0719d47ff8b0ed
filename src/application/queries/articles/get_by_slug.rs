use super::ArticleQueryService;
use crate::{
    application::{
        context::RequestContext,
        dto::{ArticleView, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        ctx: &RequestContext,
        viewer: Option<&AuthenticatedUser>,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleView> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = ctx
            .run(self.read_repo.find_by_slug(&slug))
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.projector
            .article(ctx, article, viewer.map(|viewer| viewer.id))
            .await
    }
}
