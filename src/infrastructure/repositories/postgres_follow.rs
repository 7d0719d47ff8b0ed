// src/infrastructure/repositories/postgres_follow.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::follow::FollowRepository;
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO follows (follower_id, followee_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(follower))
        .bind(i64::from(followee))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
            .bind(i64::from(follower))
            .bind(i64::from(followee))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn is_following(&self, follower: UserId, followee: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2)",
        )
        .bind(i64::from(follower))
        .bind(i64::from(followee))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
