//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use listhub_core::error::{AppError, ErrorKind};
use listhub_core::result::AppResult;
use listhub_entity::user::{NewUser, User};

use crate::store::UserStore;

const USER_COLUMNS: &str = "id, email, username, hashed_password, is_active, created_at";

/// Postgres-backed [`UserStore`].
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str, what: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {column} = $1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to find user by {what}"), e)
        })
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one("email", email, "email").await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one("username", username, "username").await
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, username, hashed_password) \
             VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_email_key") =>
            {
                AppError::conflict("Email already registered")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::conflict("Username already taken")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }
}
