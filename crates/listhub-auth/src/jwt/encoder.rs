//! Access token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use listhub_core::config::AuthConfig;
use listhub_core::error::AppError;

use super::claims::Claims;

const MAX_TTL_MINUTES: u64 = 60 * 24 * 365;
const DEFAULT_TTL_MINUTES: i64 = 30;

/// Signs HS256 access tokens with the configured secret.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

/// A freshly signed token and its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    pub fn new(config: &AuthConfig) -> Self {
        let minutes = config
            .access_token_ttl_minutes
            .min(MAX_TTL_MINUTES)
            .try_into()
            .unwrap_or(DEFAULT_TTL_MINUTES);
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::minutes(minutes),
        }
    }

    /// Issue an access token whose subject is `username`.
    pub fn issue(&self, username: &str) -> Result<IssuedToken, AppError> {
        self.issue_at(username, Utc::now())
    }

    fn issue_at(&self, username: &str, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let expires_at = now + self.ttl;
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
