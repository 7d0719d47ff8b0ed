// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentBody, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            body: CommentBody::new(row.body)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, author_id, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, article_id, author_id, body, created_at, updated_at",
        )
        .bind(i64::from(comment.article_id))
        .bind(i64::from(comment.author_id))
        .bind(comment.body.as_str())
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, author_id, body, created_at, updated_at
             FROM comments WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, author_id, body, created_at, updated_at
             FROM comments WHERE article_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
