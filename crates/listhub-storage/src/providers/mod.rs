//! Blob store provider implementations.

pub mod local;
pub mod memory;
#[cfg(feature = "s3")]
pub mod s3;

pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;
#[cfg(feature = "s3")]
pub use s3::S3BlobStore;
