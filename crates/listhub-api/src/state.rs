//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use listhub_auth::jwt::{JwtDecoder, JwtEncoder};
use listhub_auth::password::{PasswordHasher, PasswordValidator};
use listhub_core::config::AppConfig;
use listhub_core::traits::storage::BlobStore;
use listhub_database::store::{ListingStore, UserStore};
use listhub_service::{AuthService, ImageService, ListingService};
use listhub_storage::PublicUrl;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login and token resolution
    pub auth_service: Arc<AuthService>,
    /// Listing search and owner-gated mutation
    pub listing_service: Arc<ListingService>,
    /// Image upload and proxying
    pub image_service: Arc<ImageService>,
}

impl AppState {
    /// Wire the services on top of the given stores.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        listings: Arc<dyn ListingStore>,
        blobs: Arc<dyn BlobStore>,
    ) -> Self {
        let auth_service = AuthService::new(
            users,
            PasswordHasher::new(),
            PasswordValidator::new(&config.auth),
            JwtEncoder::new(&config.auth),
            JwtDecoder::new(&config.auth),
        );
        let listing_service = ListingService::new(listings, config.listing.clone());
        let public_url = PublicUrl::new(&config.storage.public_url, &config.storage.s3.bucket);
        let image_service = ImageService::new(blobs, public_url);

        Self {
            config: Arc::new(config),
            auth_service: Arc::new(auth_service),
            listing_service: Arc::new(listing_service),
            image_service: Arc::new(image_service),
        }
    }
}
