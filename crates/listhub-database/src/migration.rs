//! Embedded schema migrations.

use sqlx::PgPool;
use tracing::info;

use listhub_core::error::{AppError, ErrorKind};
use listhub_core::result::AppResult;

/// Apply every pending migration under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!("Applying database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
        })?;

    info!("Database schema is up to date");
    Ok(())
}
