// src/infrastructure/repositories/postgres_favorite.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::favorite::FavoriteRepository;
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

/// Edge and counter change together in one statement: the counter CTE only
/// sees rows the edge CTE actually inserted or deleted.
#[derive(Clone)]
pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    async fn favorite(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "WITH inserted AS (
                 INSERT INTO favorites (user_id, article_id) VALUES ($1, $2)
                 ON CONFLICT DO NOTHING
                 RETURNING article_id
             ), bumped AS (
                 UPDATE articles SET favorites_count = favorites_count + 1
                 WHERE id IN (SELECT article_id FROM inserted)
                 RETURNING id
             )
             SELECT EXISTS (SELECT 1 FROM bumped)",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn unfavorite(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "WITH removed AS (
                 DELETE FROM favorites WHERE user_id = $1 AND article_id = $2
                 RETURNING article_id
             ), dropped AS (
                 UPDATE articles SET favorites_count = GREATEST(favorites_count - 1, 0)
                 WHERE id IN (SELECT article_id FROM removed)
                 RETURNING id
             )
             SELECT EXISTS (SELECT 1 FROM dropped)",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn is_favorited(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND article_id = $2)",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
