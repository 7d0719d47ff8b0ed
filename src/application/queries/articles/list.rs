use super::ArticleQueryService;
use crate::{
    application::{
        context::RequestContext,
        dto::{ArticleListView, AuthenticatedUser, PageRequest},
        error::ApplicationResult,
    },
    domain::article::ArticleFilter,
};

/// Filters combine with AND; blank values count as absent.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub page: PageRequest,
}

impl ListArticlesQuery {
    fn filter(&self) -> ArticleFilter {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        ArticleFilter {
            tag: present(&self.tag),
            author: present(&self.author),
            favorited_by: present(&self.favorited),
        }
    }
}

impl ArticleQueryService {
    /// Newest first; `articles_count` ignores the page window.
    pub async fn list_articles(
        &self,
        ctx: &RequestContext,
        viewer: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleListView> {
        let filter = query.filter();
        let window = query.page.window();

        let articles = ctx.run(self.read_repo.list(&filter, window)).await?;
        let total = ctx.run(self.read_repo.count(&filter)).await?;

        let views = self
            .projector
            .articles(ctx, articles, viewer.map(|viewer| viewer.id))
            .await?;
        Ok(ArticleListView::new(views, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_dropped() {
        let query = ListArticlesQuery {
            tag: Some("  ".into()),
            author: Some(" jake ".into()),
            favorited: None,
            page: PageRequest::default(),
        };
        let filter = query.filter();
        assert_eq!(filter.tag, None);
        assert_eq!(filter.author.as_deref(), Some("jake"));
        assert!(filter.favorited_by.is_none());
    }
}
