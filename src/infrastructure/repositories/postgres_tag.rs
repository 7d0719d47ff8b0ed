// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagId, TagName, TagRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId(row.id),
            name: TagName::new(row.name)?,
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn get_or_create(&self, name: &TagName) -> DomainResult<Tag> {
        // The no-op update makes RETURNING yield the existing row as well.
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name) VALUES ($1)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING id, name",
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn list_names(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT name FROM tags ORDER BY name COLLATE \"C\"")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn names_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT t.name FROM tags t
             JOIN article_tags atg ON atg.tag_id = t.id
             WHERE atg.article_id = $1
             ORDER BY t.name COLLATE \"C\"",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn replace_for_article(
        &self,
        article_id: ArticleId,
        tags: &[TagId],
    ) -> DomainResult<()> {
        sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
            .bind(i64::from(article_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if tags.is_empty() {
            return Ok(());
        }

        let ids: Vec<i64> = tags.iter().map(|id| i64::from(*id)).collect();
        sqlx::query(
            "INSERT INTO article_tags (article_id, tag_id)
             SELECT $1, UNNEST($2::BIGINT[])
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(article_id))
        .bind(ids)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }
}
