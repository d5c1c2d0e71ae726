//! Inkwell - Minimal Blogging Backend
//! Mission: Accounts, bearer-token login, and owner-scoped post CRUD

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkwell_backend::{
    auth::{JwtHandler, UserStore},
    cors_layer,
    models::Config,
    posts::PostStore,
    router, AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;

    info!("🚀 Inkwell blogging backend starting");

    let users = Arc::new(UserStore::new());
    let posts = Arc::new(PostStore::new());
    let jwt = Arc::new(JwtHandler::new(
        config.jwt_secret.clone(),
        config.token_ttl_minutes,
    ));

    info!("🔐 Token expiry window: {} minutes", config.token_ttl_minutes);

    let state = AppState::new(users, posts, jwt);
    let app = router(state, cors_layer(&config.cors_allowed_origins));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("🎯 API server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with enhanced observability
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkwell_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
