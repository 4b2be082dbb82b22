//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files layered with `LISTHUB__*` environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod listing;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::listing::ListingConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::{BlobProviderKind, LocalStorageConfig, S3StorageConfig, StorageConfig};

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "LISTHUB";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration (default.toml + environment overlay + env vars).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Blob storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Listing query settings.
    #[serde(default)]
    pub listing: ListingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `{dir}/default.toml`, then `{dir}/{env}.toml`,
    /// then environment variables prefixed with `LISTHUB__`.
    ///
    /// Both files are optional; the database URL must be supplied by one of
    /// the sources.
    pub fn load(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Build a configuration from a TOML string (used by tests and tooling).
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
