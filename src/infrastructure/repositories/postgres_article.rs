// src/infrastructure/repositories/postgres_article.rs
use super::{map_slug_write, map_sqlx};
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleSlug, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle, PageWindow,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "a.id, a.slug, a.title, a.description, a.body, a.author_id, \
     a.favorites_count, a.created_at, a.updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    author_id: i64,
    favorites_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description)?,
            body: ArticleBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            favorites_count: row.favorites_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn rows_into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            title,
            description,
            body,
            author_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles AS a (slug, title, description, body, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING a.id, a.slug, a.title, a.description, a.body, a.author_id,
                       a.favorites_count, a.created_at, a.updated_at",
        )
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(body.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_slug_write(err, slug.as_str()))?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            slug,
            title,
            description,
            body,
            updated_at,
        } = update;

        let attempted_slug = slug.as_ref().map(|slug| slug.as_str().to_string());

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles AS a SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.into_inner());
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }

        builder.push(" WHERE a.id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_slug_write(err, attempted_slug.as_deref().unwrap_or_default()))?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        builder.push(" WHERE TRUE");

        if let Some(tag) = &filter.tag {
            builder.push(
                " AND EXISTS (SELECT 1 FROM article_tags atg JOIN tags t ON t.id = atg.tag_id \
                 WHERE atg.article_id = a.id AND t.name = ",
            );
            builder.push_bind(tag.clone());
            builder.push(")");
        }

        if let Some(author) = &filter.author {
            builder.push(
                " AND EXISTS (SELECT 1 FROM users u WHERE u.id = a.author_id AND u.username = ",
            );
            builder.push_bind(author.clone());
            builder.push(")");
        }

        if let Some(favorited_by) = &filter.favorited_by {
            builder.push(
                " AND EXISTS (SELECT 1 FROM favorites f JOIN users fu ON fu.id = f.user_id \
                 WHERE f.article_id = a.id AND fu.username = ",
            );
            builder.push_bind(favorited_by.clone());
            builder.push(")");
        }
    }

    fn apply_feed(builder: &mut QueryBuilder<'_, Postgres>, follower: UserId) {
        builder.push(
            " WHERE a.author_id IN (SELECT followee_id FROM follows WHERE follower_id = ",
        );
        builder.push_bind(i64::from(follower));
        builder.push(")");
    }

    fn apply_window(builder: &mut QueryBuilder<'_, Postgres>, window: PageWindow) {
        builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(i64::from(window.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(window.offset));
    }

    async fn fetch_articles(&self, mut builder: QueryBuilder<'_, Postgres>) -> DomainResult<Vec<Article>> {
        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows_into_articles(rows)
    }

    async fn fetch_count(&self, mut builder: QueryBuilder<'_, Postgres>) -> DomainResult<u64> {
        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(count_to_u64)
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        window: PageWindow,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
        Self::apply_filter(&mut builder, filter);
        Self::apply_window(&mut builder, window);
        self.fetch_articles(builder).await
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::apply_filter(&mut builder, filter);
        self.fetch_count(builder).await
    }

    async fn feed(&self, follower: UserId, window: PageWindow) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
        Self::apply_feed(&mut builder, follower);
        Self::apply_window(&mut builder, window);
        self.fetch_articles(builder).await
    }

    async fn feed_count(&self, follower: UserId) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::apply_feed(&mut builder, follower);
        self.fetch_count(builder).await
    }
}
