use super::ArticleQueryService;
use crate::{
    application::{
        context::RequestContext,
        dto::{ArticleListView, AuthenticatedUser, PageRequest},
        error::ApplicationResult,
    },
};

#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    pub page: PageRequest,
}

impl ArticleQueryService {
    /// Articles by authors the viewer follows, newest first.
    pub async fn feed(
        &self,
        ctx: &RequestContext,
        viewer: &AuthenticatedUser,
        query: FeedQuery,
    ) -> ApplicationResult<ArticleListView> {
        let window = query.page.window();

        let articles = ctx.run(self.read_repo.feed(viewer.id, window)).await?;
        let total = ctx.run(self.read_repo.feed_count(viewer.id)).await?;

        let views = self
            .projector
            .articles(ctx, articles, Some(viewer.id))
            .await?;
        Ok(ArticleListView::new(views, total))
    }
}
