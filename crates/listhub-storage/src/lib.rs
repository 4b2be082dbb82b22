//! # listhub-storage
//!
//! [`BlobStore`](listhub_core::traits::BlobStore) providers used for listing
//! images: S3-compatible object stores, the local filesystem, and process
//! memory. [`build_blob_store`] picks one from configuration and
//! [`PublicUrl`] turns stored keys into client-facing URLs.

pub mod factory;
pub mod providers;
pub mod url;

pub use factory::build_blob_store;
pub use url::PublicUrl;
