//! In-process blob store.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use listhub_core::error::AppError;
use listhub_core::result::AppResult;
use listhub_core::traits::storage::{BlobStore, StoredBlob};

/// Blob store backed by a `HashMap`. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    objects: RwLock<HashMap<String, StoredBlob>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()> {
        let blob = StoredBlob {
            data,
            content_type: Some(content_type.to_string()),
        };
        self.objects.write().await.insert(key.to_string(), blob);
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<StoredBlob> {
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Blob not found: {key}")))
    }
}
