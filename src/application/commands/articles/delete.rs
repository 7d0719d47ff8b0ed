// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        context::RequestContext,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::specifications::IsArticleAuthorSpec,
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Comments, favorites and tag links go with the article.
    pub async fn delete_article(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.find_article(ctx, command.slug).await?;

        if !IsArticleAuthorSpec::new(&article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden("permission denied"));
        }

        ctx.run(self.write_repo.delete(article.id)).await?;
        tracing::debug!(slug = %article.slug, "article deleted");
        Ok(())
    }
}
