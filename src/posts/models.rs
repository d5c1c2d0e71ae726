//! Post Models
//! Mission: Define post records and post request/response shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post owned by a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub publication_date: DateTime<Utc>,
    pub owner_id: Uuid,
}

/// Post creation request
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Post update request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Post response with the owner's email joined in at read time
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub publication_date: DateTime<Utc>,
    pub owner_id: Uuid,
    pub author_email: String,
}

impl PostResponse {
    pub fn from_post(post: &Post, author_email: String) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            publication_date: post.publication_date,
            owner_id: post.owner_id,
            author_email,
        }
    }
}
