//! JWT claims carried by access tokens.

use serde::{Deserialize, Serialize};

/// Access token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username.
    pub sub: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

impl Claims {
    /// Username the token was issued to.
    pub fn username(&self) -> &str {
        &self.sub
    }
}
