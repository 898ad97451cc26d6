//! Blog articles owned by a space or a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article metadata. The body is fetched separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogArticle {
    pub id: String,
    /// Empty for user-owned articles
    #[serde(default)]
    pub space_id: String,
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub published_at: DateTime<Utc>,
}

impl BlogArticle {
    pub fn is_user_owned(&self) -> bool {
        self.space_id.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBlogArticleRequest {
    pub space_id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBlogArticleRequest {
    pub title: String,
    pub summary: String,
    pub content: String,
}
