// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str = "id, username, email, password_hash, bio, image, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    bio: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            bio: row.bio,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl PostgresUserRepository {
    async fn find_one(&self, column: &str, value: String) -> DomainResult<Option<User>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = "));
        builder.push_bind(value);

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            email,
            password_hash,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (username, email, password_hash, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        self.find_one("username", username.as_str().to_string())
            .await
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        self.find_one("email", email.as_str().to_string()).await
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate {
            id,
            username,
            email,
            password_hash,
            bio,
            image,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE users SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(username) = username {
            builder.push(", username = ");
            builder.push_bind(username.into_inner());
        }

        if let Some(email) = email {
            builder.push(", email = ");
            builder.push_bind(email.into_inner());
        }

        if let Some(password_hash) = password_hash {
            builder.push(", password_hash = ");
            builder.push_bind(password_hash.as_str().to_string());
        }

        if let Some(bio) = bio {
            builder.push(", bio = ");
            builder.push_bind(bio);
        }

        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {USER_COLUMNS}"));

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }
}
