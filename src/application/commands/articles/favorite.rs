// src/application/commands/articles/favorite.rs
use super::ArticleCommandService;
use crate::{
    application::{
        context::RequestContext,
        dto::{ArticleView, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct FavoriteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Idempotent; favoriting twice leaves a single edge.
    pub async fn favorite_article(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleView> {
        let article = self.find_article(ctx, command.slug).await?;
        let inserted = ctx
            .run(self.favorite_repo.favorite(actor.id, article.id))
            .await?;
        if !inserted {
            tracing::debug!(slug = %article.slug, user = %actor.id, "already favorited");
        }
        self.refreshed_view(ctx, actor, article.id).await
    }

    /// Idempotent; unfavoriting an article never favorited succeeds.
    pub async fn unfavorite_article(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleView> {
        let article = self.find_article(ctx, command.slug).await?;
        let removed = ctx
            .run(self.favorite_repo.unfavorite(actor.id, article.id))
            .await?;
        if !removed {
            tracing::debug!(slug = %article.slug, user = %actor.id, "was not favorited");
        }
        self.refreshed_view(ctx, actor, article.id).await
    }

    async fn refreshed_view(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        article_id: ArticleId,
    ) -> ApplicationResult<ArticleView> {
        let article = ctx
            .run(self.read_repo.find_by_id(article_id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        self.projector.article(ctx, article, Some(actor.id)).await
    }
}
