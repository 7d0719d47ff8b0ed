// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub author_id: UserId,
    /// Denormalized count of favorite edges referencing this article.
    pub favorites_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub slug: Option<ArticleSlug>,
    pub title: Option<ArticleTitle>,
    pub description: Option<ArticleDescription>,
    pub body: Option<ArticleBody>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug: None,
            title: None,
            description: None,
            body: None,
            updated_at,
        }
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn set_slug(&mut self, slug: ArticleSlug) {
        self.slug = Some(slug);
    }
}
