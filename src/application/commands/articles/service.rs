// src/application/commands/articles/service.rs
use std::{future::Future, sync::Arc};

use crate::{
    application::{
        context::RequestContext,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        projection::Projector,
    },
    domain::{
        article::{
            Article, ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleWriteRepository,
            services::ArticleSlugService,
        },
        errors::{DomainError, DomainResult},
        favorite::FavoriteRepository,
        tag::TagRepository,
    },
};

/// How many times a write is retried after losing a slug race.
pub const MAX_SLUG_ATTEMPTS: usize = 5;

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) favorite_repo: Arc<dyn FavoriteRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) projector: Arc<Projector>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        slug_service: Arc<ArticleSlugService>,
        projector: Arc<Projector>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            tag_repo,
            favorite_repo,
            slug_service,
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
        ctx.run(self.read_repo.find_by_slug(&slug))
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Runs `write` with a freshly probed slug, probing again whenever the
    /// store reports that a concurrent writer claimed the slug first.
    pub(super) async fn write_with_unique_slug<F, Fut>(
        &self,
        ctx: &RequestContext,
        title: &ArticleTitle,
        own_slug: Option<&ArticleSlug>,
        mut write: F,
    ) -> ApplicationResult<Article>
    where
        F: FnMut(ArticleSlug) -> Fut,
        Fut: Future<Output = DomainResult<Article>>,
    {
        let mut last_slug = String::new();
        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = ctx
                .run(self.slug_service.generate_unique_slug(title, own_slug))
                .await?;
            match ctx.attempt(write(slug)).await? {
                Ok(article) => return Ok(article),
                Err(DomainError::DuplicateSlug(slug)) => {
                    tracing::debug!(%slug, attempt, "lost slug race, probing again");
                    last_slug = slug;
                }
                Err(err) => return Err(err.into()),
            }
        }

        tracing::warn!(slug = %last_slug, "giving up after repeated slug collisions");
        Err(DomainError::DuplicateSlug(last_slug).into())
    }
}
