// src/application/commands/articles/create.rs
use std::collections::BTreeSet;

use super::ArticleCommandService;
use crate::{
    application::{
        context::RequestContext,
        dto::{ArticleView, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleBody, ArticleDescription, ArticleId, ArticleTitle, NewArticle},
        tag::TagName,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    description: Option<String>,
    body: Option<String>,
    tag_list: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag_list.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_list.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description.ok_or("description is required")?,
            body: self.body.ok_or("body is required")?,
            tag_list: self.tag_list,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleView> {
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.description)?;
        let body = ArticleBody::new(command.body)?;
        let tags = normalize_tags(command.tag_list)?;
        let now = self.clock.now();

        let created = self
            .write_with_unique_slug(ctx, &title, None, |slug| {
                self.write_repo.insert(NewArticle {
                    slug,
                    title: title.clone(),
                    description: description.clone(),
                    body: body.clone(),
                    author_id: actor.id,
                    created_at: now,
                    updated_at: now,
                })
            })
            .await?;

        self.attach_tags(ctx, created.id, &tags).await?;
        tracing::debug!(slug = %created.slug, author = %actor.id, "article created");

        self.projector.article(ctx, created, Some(actor.id)).await
    }

    async fn attach_tags(
        &self,
        ctx: &RequestContext,
        article_id: ArticleId,
        tags: &BTreeSet<TagName>,
    ) -> ApplicationResult<()> {
        let mut ids = Vec::with_capacity(tags.len());
        for name in tags {
            let tag = ctx.run(self.tag_repo.get_or_create(name)).await?;
            ids.push(tag.id);
        }
        ctx.run(self.tag_repo.replace_for_article(article_id, &ids))
            .await
    }
}

/// Trims names, skips blanks and collapses duplicates.
fn normalize_tags(raw: Vec<String>) -> ApplicationResult<BTreeSet<TagName>> {
    let mut tags = BTreeSet::new();
    for name in raw {
        if name.trim().is_empty() {
            continue;
        }
        tags.insert(TagName::new(name)?);
    }
    Ok(tags)
}
