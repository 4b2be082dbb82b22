//! Local filesystem blob store.
//!
//! Each object is written to `{root}/{key}`; its content type is kept next
//! to it in `{root}/{key}.content-type`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use listhub_core::error::{AppError, ErrorKind};
use listhub_core::result::AppResult;
use listhub_core::traits::storage::{BlobStore, StoredBlob};

const CONTENT_TYPE_SUFFIX: &str = ".content-type";

/// Blob store rooted at a local directory.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create the store, creating `root_path` if it does not exist.
    pub async fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create image directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.root.join(key.trim_start_matches('/'))
    }

    fn content_type_path(&self, key: &str) -> PathBuf {
        let mut path = self.object_path(key).into_os_string();
        path.push(CONTENT_TYPE_SUFFIX);
        PathBuf::from(path)
    }

    async fn ensure_parent(path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()> {
        let path = self.object_path(key);
        Self::ensure_parent(&path).await?;

        let size = data.len();
        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write {key}"), e)
        })?;
        fs::write(self.content_type_path(key), content_type)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to write content type for {key}"),
                    e,
                )
            })?;

        debug!(key, size, content_type, "Stored blob on local filesystem");
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<StoredBlob> {
        let data = fs::read(self.object_path(key)).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {key}"))
            } else {
                AppError::with_source(ErrorKind::Storage, format!("Failed to read {key}"), e)
            }
        })?;

        let content_type = match fs::read_to_string(self.content_type_path(key)).await {
            Ok(value) => Some(value.trim().to_string()).filter(|v| !v.is_empty()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read content type for {key}"),
                    e,
                ));
            }
        };

        debug!(key, size = data.len(), "Read blob from local filesystem");
        Ok(StoredBlob {
            data: Bytes::from(data),
            content_type,
        })
    }
}
