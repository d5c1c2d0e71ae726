//! Inkwell Backend Library
//!
//! Exposes the stores, auth plumbing, and the HTTP router for use by the
//! server binary and the integration tests.

pub mod auth;
pub mod middleware;
pub mod models;
pub mod posts;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::auth::{api as auth_api, auth_middleware, JwtHandler, UserStore};
use crate::posts::{api as posts_api, PostStore};

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub posts: Arc<PostStore>,
    pub jwt: Arc<JwtHandler>,
}

impl AppState {
    pub fn new(users: Arc<UserStore>, posts: Arc<PostStore>, jwt: Arc<JwtHandler>) -> Self {
        Self { users, posts, jwt }
    }
}

/// Build the full application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    // Protected routes: the bearer token is resolved to a live user before
    // handler dispatch
    let protected_routes = Router::new()
        .route("/users/me", get(auth_api::current_user))
        .route("/users/", get(auth_api::list_users))
        .route("/posts/", post(posts_api::create_post))
        .route("/posts/:id", put(posts_api::update_post))
        .route("/posts/:id", delete(posts_api::delete_post))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/users/", post(auth_api::register))
        .route("/token", post(auth_api::login))
        .route("/posts/", get(posts_api::list_posts))
        .route("/posts/:id", get(posts_api::get_post));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(axum_middleware::from_fn(middleware::request_logging))
        .layer(cors)
        .with_state(state)
}

/// CORS for local development clients: configured origins only, with
/// credentials, mirroring whatever methods and headers the client asks for.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "🚀 Inkwell operational"
}
