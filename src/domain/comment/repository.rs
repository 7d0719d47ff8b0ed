use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, CommentId, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// Newest first.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
