//! Authentication API Endpoints
//! Mission: Registration, login, and user listing

use crate::auth::{
    middleware::CurrentUser,
    models::{LoginRequest, RegisterRequest, TokenResponse, UserResponse},
    user_store::{AuthenticateError, RegisterError},
};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use tracing::{info, warn};

/// Register a new account - POST /users/
///
/// The first account ever registered becomes the admin.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AuthApiError> {
    if !email_is_plausible(&payload.email) {
        return Err(AuthApiError::InvalidEmail);
    }

    let user = state
        .users
        .register(&payload.email, &payload.password)
        .map_err(|e| match e {
            RegisterError::DuplicateEmail => AuthApiError::EmailTaken,
            RegisterError::Hash(e) => {
                warn!("Password hashing failed: {}", e);
                AuthApiError::InternalError
            }
        })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from_user(&user))))
}

/// Log in with email and password - POST /token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthApiError> {
    info!("🔐 Login attempt: {}", payload.email);

    let user = state
        .users
        .authenticate(&payload.email, &payload.password)
        .map_err(|e| match e {
            AuthenticateError::InvalidCredentials => AuthApiError::InvalidCredentials,
            AuthenticateError::Hash(e) => {
                warn!("Password verification failed: {}", e);
                AuthApiError::InternalError
            }
        })?;

    let access_token = state.jwt.issue(&user.id).map_err(|e| {
        warn!("Token issuance failed: {}", e);
        AuthApiError::InternalError
    })?;

    info!("✅ Login successful: {}", user.email);

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

/// Current account info - GET /users/me
pub async fn current_user(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<UserResponse> {
    Json(UserResponse::from_user(&user))
}

/// List all accounts - GET /users/ (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<UserResponse>>, AuthApiError> {
    if !user.is_admin {
        return Err(AuthApiError::Forbidden);
    }

    let users = state.users.list_all();
    let response: Vec<UserResponse> = users.iter().map(UserResponse::from_user).collect();

    Ok(Json(response))
}

/// Cheap structural check; full RFC validation is out of scope
fn email_is_plausible(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Auth API errors
#[derive(Debug)]
pub enum AuthApiError {
    InvalidEmail,
    EmailTaken,
    InvalidCredentials,
    Forbidden,
    InternalError,
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthApiError::InvalidEmail => (StatusCode::BAD_REQUEST, "Invalid email address"),
            AuthApiError::EmailTaken => (StatusCode::BAD_REQUEST, "Email already registered"),
            AuthApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Incorrect email or password")
            }
            AuthApiError::Forbidden => (StatusCode::FORBIDDEN, "Not authorized"),
            AuthApiError::InternalError => {
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
    fn test_email_plausibility() {
        assert!(email_is_plausible("a@x.com"));
        assert!(email_is_plausible("first.last@sub.example.org"));

        assert!(!email_is_plausible("not-an-email"));
        assert!(!email_is_plausible("@x.com"));
        assert!(!email_is_plausible("a@nodot"));
        assert!(!email_is_plausible("a@.com"));
        assert!(!email_is_plausible("a@com."));
    }

    #[test]
    fn test_auth_api_error_responses() {
        let invalid_email = AuthApiError::InvalidEmail.into_response();
        assert_eq!(invalid_email.status(), StatusCode::BAD_REQUEST);

        let taken = AuthApiError::EmailTaken.into_response();
        assert_eq!(taken.status(), StatusCode::BAD_REQUEST);

        let invalid_creds = AuthApiError::InvalidCredentials.into_response();
        assert_eq!(invalid_creds.status(), StatusCode::UNAUTHORIZED);

        let forbidden = AuthApiError::Forbidden.into_response();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
    }
}
