//! Post Storage
//! Mission: Hold posts in memory with ownership-checked mutation

use crate::posts::models::Post;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// Failures from ownership-checked operations
#[derive(Debug, PartialEq, Eq)]
pub enum PostStoreError {
    NotFound,
    Forbidden,
}

impl std::fmt::Display for PostStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStoreError::NotFound => write!(f, "Post not found"),
            PostStoreError::Forbidden => write!(f, "Not the post owner"),
        }
    }
}

impl std::error::Error for PostStoreError {}

/// In-memory post storage
pub struct PostStore {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    /// Create a post owned by the given user, stamped at call time
    pub fn create(&self, owner_id: Uuid, title: String, content: String) -> Post {
        let post = Post {
            id: Uuid::new_v4(),
            title,
            content,
            publication_date: Utc::now(),
            owner_id,
        };
        self.posts.write().insert(post.id, post.clone());

        info!("📝 Created post {} (owner: {})", post.id, post.owner_id);
        post
    }

    /// Get post by id
    pub fn get(&self, id: &Uuid) -> Option<Post> {
        self.posts.read().get(id).cloned()
    }

    /// All posts, unordered
    pub fn list_all(&self) -> Vec<Post> {
        self.posts.read().values().cloned().collect()
    }

    /// Overwrite the given fields if the post exists and the caller owns it.
    ///
    /// Existence and ownership are checked before any field is touched, so a
    /// failed update leaves the post completely unchanged. The publication
    /// date is set once at creation and never rewritten.
    pub fn update(
        &self,
        id: &Uuid,
        owner_id: &Uuid,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Post, PostStoreError> {
        let mut posts = self.posts.write();
        let post = posts.get_mut(id).ok_or(PostStoreError::NotFound)?;
        if post.owner_id != *owner_id {
            return Err(PostStoreError::Forbidden);
        }

        if let Some(title) = title {
            post.title = title;
        }
        if let Some(content) = content {
            post.content = content;
        }

        Ok(post.clone())
    }

    /// Remove the post if it exists and the caller owns it
    pub fn delete(&self, id: &Uuid, owner_id: &Uuid) -> Result<(), PostStoreError> {
        let mut posts = self.posts.write();
        let post = posts.get(id).ok_or(PostStoreError::NotFound)?;
        if post.owner_id != *owner_id {
            return Err(PostStoreError::Forbidden);
        }
        posts.remove(id);

        info!("🗑️  Deleted post {}", id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
