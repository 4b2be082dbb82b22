//! Account service: registration, credential checks and token handling.

use std::sync::Arc;

use tracing::{info, warn};

use listhub_auth::jwt::{JwtDecoder, JwtEncoder};
use listhub_auth::password::{PasswordHasher, PasswordValidator};
use listhub_core::error::AppError;
use listhub_database::store::UserStore;
use listhub_entity::user::{NewUser, User};

const BAD_CREDENTIALS: &str = "Incorrect username or password";
const BAD_TOKEN: &str = "Could not validate credentials";

/// A bearer token handed out by [`AuthService::login`].
#[derive(Debug, Clone)]
pub struct LoginToken {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Handles account creation and authentication.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        validator: PasswordValidator,
        encoder: JwtEncoder,
        decoder: JwtDecoder,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
            decoder,
        }
    }

    /// Create an account.
    ///
    /// Fails with `Conflict` if the email or username is taken (email is
    /// checked first) and with `Validation` if the password is too short.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<User, AppError> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }
        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict("Username already taken"));
        }
        self.validator.validate(password)?;

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .users
            .insert(NewUser {
                email: email.to_string(),
                username: username.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Check a username/password pair. Every failure yields the same message.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            warn!(username, "Login attempt for unknown user");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        };

        if !self.hasher.verify(password, &user.hashed_password)? {
            warn!(username, "Login attempt with wrong password");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        }
        if !user.can_login() {
            warn!(username, "Login attempt for inactive user");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        }

        Ok(user)
    }

    /// Authenticate and issue an access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginToken, AppError> {
        let user = self.authenticate(username, password).await?;
        let issued = self.encoder.issue(&user.username)?;

        info!(user_id = user.id, expires_at = %issued.expires_at, "Access token issued");
        Ok(LoginToken {
            access_token: issued.token,
            token_type: "bearer",
        })
    }

    /// Resolve a bearer token to an active user.
    pub async fn resolve_token(&self, token: &str) -> Result<User, AppError> {
        let claims = self.decoder.decode(token)?;

        match self.users.find_by_username(claims.username()).await? {
            Some(user) if user.can_login() => Ok(user),
            Some(_) => {
                warn!(username = claims.username(), "Token presented for inactive user");
                Err(AppError::authentication(BAD_TOKEN))
            }
            None => Err(AppError::authentication(BAD_TOKEN)),
        }
    }
}
