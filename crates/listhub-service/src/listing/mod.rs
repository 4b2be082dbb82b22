//! Listing queries and owner-gated mutations.

pub mod service;

pub use service::{ListingService, PageParams};
