//! Authentication Middleware
//! Mission: Resolve bearer tokens to live accounts before handler dispatch

use crate::{auth::models::User, AppState};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Resolved identity attached to authenticated requests
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Auth middleware that validates bearer tokens and resolves the subject.
///
/// Protected handlers only run with a `CurrentUser` in the request
/// extensions; any failure here ends the request with 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|t| t.to_string())
        .ok_or(AuthError::MissingToken)?;

    let user_id = state
        .jwt
        .verify(&token)
        .map_err(|_| AuthError::InvalidToken)?;

    // A valid signature proves nothing about the account still existing;
    // the subject is re-resolved on every request.
    let user = state
        .users
        .get_by_id(&user_id)
        .ok_or(AuthError::UnknownSubject)?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Auth error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    UnknownSubject,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authorization token"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            AuthError::UnknownSubject => {
                (StatusCode::UNAUTHORIZED, "Could not validate credentials")
            }
        };

        (status, message).into_response()
    }
}
