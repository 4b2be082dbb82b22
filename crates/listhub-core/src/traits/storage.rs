//! Blob store trait for pluggable image storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// An object read back from a blob store.
#[derive(Debug, Clone)]
pub struct StoredBlob {
    /// Raw object content.
    pub data: Bytes,
    /// Content type recorded when the object was written, if any.
    pub content_type: Option<String>,
}

/// Trait for opaque key-addressed binary storage.
///
/// Implementations exist for S3-compatible object stores, the local
/// filesystem, and process memory. The trait is defined here in
/// `listhub-core` and implemented in `listhub-storage`.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "s3", "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store `data` under `key`, recording `content_type` as retrieval
    /// metadata. An existing object with the same key is overwritten.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()>;

    /// Read the object stored under `key`.
    ///
    /// Fails with a `NotFound` error when the key is absent.
    async fn get(&self, key: &str) -> AppResult<StoredBlob>;
}
