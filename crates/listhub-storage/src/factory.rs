//! Blob store selection from configuration.

use std::sync::Arc;

use tracing::info;

use listhub_core::config::{BlobProviderKind, StorageConfig};
use listhub_core::result::AppResult;
use listhub_core::traits::storage::BlobStore;

use crate::providers::{LocalBlobStore, MemoryBlobStore};

/// Build the blob store named by `config.provider`.
pub async fn build_blob_store(config: &StorageConfig) -> AppResult<Arc<dyn BlobStore>> {
    info!(provider = %config.provider, "Building blob store");

    let store: Arc<dyn BlobStore> = match config.provider {
        BlobProviderKind::S3 => s3_store(config)?,
        BlobProviderKind::Local => Arc::new(LocalBlobStore::new(&config.local.root_path).await?),
        BlobProviderKind::Memory => Arc::new(MemoryBlobStore::new()),
    };
    Ok(store)
}

#[cfg(feature = "s3")]
fn s3_store(config: &StorageConfig) -> AppResult<Arc<dyn BlobStore>> {
    Ok(Arc::new(crate::providers::S3BlobStore::new(&config.s3)))
}

#[cfg(not(feature = "s3"))]
fn s3_store(_config: &StorageConfig) -> AppResult<Arc<dyn BlobStore>> {
    Err(listhub_core::AppError::configuration(
        "S3 blob store requested but listhub-storage was built without the `s3` feature",
    ))
}
