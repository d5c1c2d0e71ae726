//! Authentication Models
//! Mission: Define user records and auth request/response shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt hash - never serialize
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject (user id)
    pub exp: usize,  // expiration timestamp
}

/// Registration request body
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str, // always "bearer"
}

/// User response (sanitized)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub is_admin: bool,
}

impl UserResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            is_admin: user.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: "$2b$12$secret-hash-material".to_string(),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_serialization_omits_password_hash() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("test@example.com"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("secret-hash-material"));
    }

    #[test]
    fn test_user_response_drops_sensitive_fields() {
        let user = sample_user();
        let response = UserResponse::from_user(&user);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["email"], "test@example.com");
        assert_eq!(json["is_admin"], false);
        assert!(json.get("password_hash").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_update_request_rejects_unknown_fields() {
        let result = serde_json::from_str::<RegisterRequest>(
            r#"{"email":"a@x.com","password":"pw","role":"admin"}"#,
        );
        assert!(result.is_err());
    }
}
