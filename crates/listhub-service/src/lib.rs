//! # listhub-service
//!
//! Business logic for Listhub. Each service orchestrates stores, the blob
//! store and the auth primitives to implement one group of use cases.
//!
//! Services follow constructor injection: every dependency is handed over
//! at construction time, stores as `Arc<dyn ...>` trait objects.

pub mod auth;
pub mod context;
pub mod image;
pub mod listing;

pub use auth::{AuthService, LoginToken};
pub use context::RequestContext;
pub use image::{ImageService, ServedImage, UploadedImage};
pub use listing::{ListingService, PageParams};
