//! Post API Endpoints
//! Mission: Post CRUD with ownership authorization

use crate::auth::middleware::CurrentUser;
use crate::posts::models::{CreatePostRequest, PostResponse, UpdatePostRequest};
use crate::posts::store::PostStoreError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use tracing::warn;
use uuid::Uuid;

/// Create a post - POST /posts/
pub async fn create_post(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreatePostRequest>,
) -> (StatusCode, Json<PostResponse>) {
    let post = state.posts.create(user.id, payload.title, payload.content);

    // The creator is the owner, so the author join is a field read here
    (
        StatusCode::CREATED,
        Json(PostResponse::from_post(&post, user.email)),
    )
}

/// List all posts - GET /posts/
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, PostApiError> {
    let posts = state.posts.list_all();

    let mut response = Vec::with_capacity(posts.len());
    for post in &posts {
        let email = author_email(&state, &post.owner_id)?;
        response.push(PostResponse::from_post(post, email));
    }

    Ok(Json(response))
}

/// Fetch one post - GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostResponse>, PostApiError> {
    let post = state.posts.get(&id).ok_or(PostApiError::NotFound)?;
    let email = author_email(&state, &post.owner_id)?;

    Ok(Json(PostResponse::from_post(&post, email)))
}

/// Update a post - PUT /posts/:id (owner only)
pub async fn update_post(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, PostApiError> {
    let post = state
        .posts
        .update(&id, &user.id, payload.title, payload.content)?;

    // The owner performed the update, so their email is already at hand
    Ok(Json(PostResponse::from_post(&post, user.email)))
}

/// Delete a post - DELETE /posts/:id (owner only)
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PostApiError> {
    state.posts.delete(&id, &user.id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Owner emails are resolved when the response is built, never stored on the
/// post, so responses always reflect the owner's current account state.
fn author_email(state: &AppState, owner_id: &Uuid) -> Result<String, PostApiError> {
    match state.users.get_by_id(owner_id) {
        Some(user) => Ok(user.email),
        None => {
            // Users are never deleted, so a dangling owner is a bug
            warn!("Post owner {} missing from user store", owner_id);
            Err(PostApiError::InternalError)
        }
    }
}

/// Post API errors
#[derive(Debug)]
pub enum PostApiError {
    NotFound,
    Forbidden,
    InternalError,
}

impl From<PostStoreError> for PostApiError {
    fn from(e: PostStoreError) -> Self {
        match e {
            PostStoreError::NotFound => PostApiError::NotFound,
            PostStoreError::Forbidden => PostApiError::Forbidden,
        }
    }
}

impl IntoResponse for PostApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PostApiError::NotFound => (StatusCode::NOT_FOUND, "Post not found"),
            PostApiError::Forbidden => {
                (StatusCode::FORBIDDEN, "Not authorized to modify this post")
            }
            PostApiError::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_api_errors() {
        assert!(matches!(
            PostApiError::from(PostStoreError::NotFound),
            PostApiError::NotFound
        ));
        assert!(matches!(
            PostApiError::from(PostStoreError::Forbidden),
            PostApiError::Forbidden
        ));
    }

    #[test]
    fn test_post_api_error_responses() {
        let not_found = PostApiError::NotFound.into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let forbidden = PostApiError::Forbidden.into_response();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

        let internal = PostApiError::InternalError.into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
