use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Favorite edges plus the denormalized `favorites_count` on the article.
///
/// Both mutations are idempotent: repeating them is not an error, and the
/// counter only moves when an edge was actually inserted or removed.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Returns `true` when a new edge was created.
    async fn favorite(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool>;
    /// Returns `true` when an existing edge was removed.
    async fn unfavorite(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool>;
    async fn is_favorited(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool>;
}
