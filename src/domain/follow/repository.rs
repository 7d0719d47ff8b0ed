use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Directed follow edges. Self-follow is rejected by callers, not here.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()>;
    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()>;
    async fn is_following(&self, follower: UserId, followee: UserId) -> DomainResult<bool>;
}
