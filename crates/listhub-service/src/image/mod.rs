//! Image upload and retrieval through the blob store.

pub mod service;

pub use service::{ALLOWED_CONTENT_TYPES, ImageService, ServedImage, UploadedImage};
