use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Conjunctive listing filters; `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited_by: Option<String>,
}

impl ArticleFilter {
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.author.is_none() && self.favorited_by.is_none()
    }
}

/// Offset/limit window over a newest-first listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u32,
    pub offset: u32,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with `DomainError::DuplicateSlug` when the slug is already stored.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool>;
    async fn list(&self, filter: &ArticleFilter, window: PageWindow)
    -> DomainResult<Vec<Article>>;
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;
    async fn feed(&self, follower: UserId, window: PageWindow) -> DomainResult<Vec<Article>>;
    async fn feed_count(&self, follower: UserId) -> DomainResult<u64>;
}
