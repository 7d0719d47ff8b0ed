use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{profiles::ProfileView, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: i64,
    pub body: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, example = "2024-01-01T00:00:00.000Z")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, example = "2024-01-01T00:00:00.000Z")]
    pub updated_at: DateTime<Utc>,
    pub author: ProfileView,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentListView {
    pub comments: Vec<CommentView>,
}
