//! JWT Token Handler
//! Mission: Issue and verify bearer tokens securely

use crate::auth::models::Claims;
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;
use uuid::Uuid;

/// JWT handler for token operations
pub struct JwtHandler {
    secret: String,
    ttl_minutes: i64,
}

impl JwtHandler {
    /// Create a new JWT handler with a signing secret and expiry window
    pub fn new(secret: String, ttl_minutes: i64) -> Self {
        Self {
            secret,
            ttl_minutes,
        }
    }

    /// Issue a signed token for a user id, expiring after the configured window
    pub fn issue(&self, user_id: &Uuid) -> Result<String> {
        let expiration = Utc::now()
            .checked_add_signed(chrono::Duration::minutes(self.ttl_minutes))
            .context("Invalid expiry timestamp")?
            .timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration as usize,
        };

        debug!(
            "Issuing JWT for user {}, expires in {}m",
            user_id, self.ttl_minutes
        );

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign JWT")
    }

    /// Verify a token and extract the subject id.
    ///
    /// The subject is not guaranteed to still exist - callers must re-resolve
    /// it against the user store.
    pub fn verify(&self, token: &str) -> Result<Uuid> {
        // Zero leeway: a token is rejected from its expiry instant onward.
        let mut validation = Validation::default();
        validation.leeway = 0;

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .context("Invalid or expired token")?;

        Uuid::parse_str(&decoded.claims.sub).context("Malformed subject claim")
    }
}
