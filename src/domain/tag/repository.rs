use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{Tag, TagId, TagName};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Returns the stored tag with exactly this name, creating it if needed.
    async fn get_or_create(&self, name: &TagName) -> DomainResult<Tag>;
    /// Every tag name in the vocabulary, sorted.
    async fn list_names(&self) -> DomainResult<Vec<String>>;
    /// Tag names attached to an article, sorted.
    async fn names_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<String>>;
    /// Replaces the article's tag membership wholesale (delete, then insert).
    async fn replace_for_article(&self, article_id: ArticleId, tags: &[TagId])
    -> DomainResult<()>;
}
