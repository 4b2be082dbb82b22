//! Listhub Server: listings backend with accounts, search and image relay.
//!
//! Main entry point that loads configuration, sets up logging and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use listhub_core::config::AppConfig;
use listhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = listhub_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `LISTHUB_CONFIG_DIR` (default `config/`), the
/// `LISTHUB_ENV` overlay (default `development`) and `LISTHUB__*` variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let dir = std::env::var("LISTHUB_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("LISTHUB_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
