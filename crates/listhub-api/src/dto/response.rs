//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use listhub_entity::user::User;
use listhub_service::{LoginToken, UploadedImage};

/// Public view of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<LoginToken> for TokenResponse {
    fn from(token: LoginToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type.to_string(),
        }
    }
}

/// Generic `{"message": ...}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of an image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// URL the client should store in `image_url`.
    pub url: String,
    /// Generated object key.
    pub filename: String,
}

impl From<UploadedImage> for UploadResponse {
    fn from(image: UploadedImage) -> Self {
        Self {
            url: image.url,
            filename: image.filename,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when every dependency answers, `degraded` otherwise.
    pub status: String,
    pub version: String,
    pub database: String,
    pub storage: String,
}
