//! User Storage
//! Mission: Hold user accounts in memory with bcrypt credential checks

use crate::auth::models::User;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{info, warn};
use uuid::Uuid;

/// Registration failure
#[derive(Debug)]
pub enum RegisterError {
    DuplicateEmail,
    Hash(bcrypt::BcryptError),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::DuplicateEmail => write!(f, "Email already registered"),
            RegisterError::Hash(e) => write!(f, "Password hashing failed: {e}"),
        }
    }
}

impl std::error::Error for RegisterError {}

/// Login failure. Unknown email and wrong password are collapsed into a
/// single variant so callers cannot tell them apart.
#[derive(Debug)]
pub enum AuthenticateError {
    InvalidCredentials,
    Hash(bcrypt::BcryptError),
}

impl std::fmt::Display for AuthenticateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthenticateError::InvalidCredentials => write!(f, "Incorrect email or password"),
            AuthenticateError::Hash(e) => write!(f, "Password verification failed: {e}"),
        }
    }
}

impl std::error::Error for AuthenticateError {}

/// In-memory user storage
pub struct UserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new account. The very first account ever created becomes
    /// the admin; every later one does not.
    pub fn register(&self, email: &str, password: &str) -> Result<User, RegisterError> {
        // Hash before taking the lock - bcrypt is deliberately slow.
        let password_hash = hash(password, DEFAULT_COST).map_err(RegisterError::Hash)?;

        let mut users = self.users.write();
        if users.values().any(|u| u.email == email) {
            return Err(RegisterError::DuplicateEmail);
        }

        // Emptiness check and insert happen under the same write lock, so
        // two racing registrations can never both claim the admin flag.
        let is_admin = users.is_empty();

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash,
            is_admin,
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        drop(users);

        info!("✅ Registered user: {} (admin: {})", user.email, user.is_admin);
        Ok(user)
    }

    /// Check credentials and return the matching account.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthenticateError> {
        let user = {
            let users = self.users.read();
            users.values().find(|u| u.email == email).cloned()
        };

        let Some(user) = user else {
            warn!("❌ Failed login attempt: {}", email);
            return Err(AuthenticateError::InvalidCredentials);
        };

        let valid = verify(password, &user.password_hash).map_err(AuthenticateError::Hash)?;
        if !valid {
            warn!("❌ Failed login attempt: {}", email);
            return Err(AuthenticateError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Get user by id
    pub fn get_by_id(&self, id: &Uuid) -> Option<User> {
        self.users.read().get(id).cloned()
    }

    /// List all users (admin gate lives at the API layer)
    pub fn list_all(&self) -> Vec<User> {
        self.users.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
