//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique email address.
    pub email: String,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash (PHC string).
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// Whether the account may authenticate.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the user can log in right now.
    pub fn can_login(&self) -> bool {
        self.is_active
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Email address.
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
