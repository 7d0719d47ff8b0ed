// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        context::RequestContext,
        dto::{ArticleView, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleTitle, ArticleUpdate,
        specifications::IsArticleAuthorSpec,
    },
};

/// `None` leaves the stored field as it is.
pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleView> {
        let article = self.find_article(ctx, command.slug).await?;
        if !IsArticleAuthorSpec::new(&article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden("permission denied"));
        }

        let mut update = ArticleUpdate::new(article.id, self.clock.now());
        if let Some(description) = command.description {
            update = update.with_description(ArticleDescription::new(description)?);
        }
        if let Some(body) = command.body {
            update = update.with_body(ArticleBody::new(body)?);
        }

        let new_title = command.title.map(ArticleTitle::new).transpose()?;
        let updated = match new_title {
            Some(title) if title != article.title => {
                let update = update.with_title(title.clone());
                self.write_with_unique_slug(ctx, &title, Some(&article.slug), |slug| {
                    let mut update = update.clone();
                    update.set_slug(slug);
                    self.write_repo.update(update)
                })
                .await?
            }
            _ => ctx.run(self.write_repo.update(update)).await?,
        };

        self.projector.article(ctx, updated, Some(actor.id)).await
    }
}
