use super::TagQueryService;
use crate::application::{context::RequestContext, dto::TagListView, error::ApplicationResult};

impl TagQueryService {
    /// Every known tag, alphabetical.
    pub async fn list_tags(&self, ctx: &RequestContext) -> ApplicationResult<TagListView> {
        let mut tags = ctx.run(self.tag_repo.list_names()).await?;
        tags.sort();
        Ok(TagListView { tags })
    }
}
