use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment body cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Comments are immutable once written; there is no update path.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn belongs_to(&self, article_id: ArticleId) -> bool {
        self.article_id == article_id
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
}
