use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{profiles::ProfileView, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, example = "2024-01-01T00:00:00.000Z")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, example = "2024-01-01T00:00:00.000Z")]
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: ProfileView,
}

/// One page of articles plus the total number of matches.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListView {
    pub articles: Vec<ArticleView>,
    pub articles_count: u64,
}

impl ArticleListView {
    pub fn new(articles: Vec<ArticleView>, articles_count: u64) -> Self {
        Self {
            articles,
            articles_count,
        }
    }
}
