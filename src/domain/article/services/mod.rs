// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::slug::{FALLBACK_SLUG, candidate};
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Probes `base`, `base-1`, ... against stored slugs. `own_slug` counts as
    /// free so an article can keep (or return to) its current identifier.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        own_slug: Option<&ArticleSlug>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base = if base.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            base
        };

        let mut attempt = 0u64;
        loop {
            let slug = ArticleSlug::new(candidate(&base, attempt))?;
            if own_slug.is_some_and(|own| own == &slug) {
                return Ok(slug);
            }
            if !self.read_repo.slug_exists(&slug).await? {
                return Ok(slug);
            }
            tracing::debug!(slug = %slug, "slug taken, probing next candidate");
            attempt += 1;
        }
    }
}
