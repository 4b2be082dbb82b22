//! Image service: validates uploads, assigns keys and proxies reads.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info};
use uuid::Uuid;

use listhub_core::error::{AppError, ErrorKind};
use listhub_core::traits::storage::{BlobStore, StoredBlob};
use listhub_storage::PublicUrl;

/// Content types accepted for upload.
pub const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Content type reported for objects stored without one.
const FALLBACK_CONTENT_TYPE: &str = "image/jpeg";

const DEFAULT_EXTENSION: &str = "jpg";

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Client-facing URL of the stored image.
    pub url: String,
    /// Generated object key.
    pub filename: String,
}

/// An image read back for serving.
#[derive(Debug, Clone)]
pub struct ServedImage {
    pub data: Bytes,
    pub content_type: String,
}

/// Relays image bytes to and from the blob store.
#[derive(Debug, Clone)]
pub struct ImageService {
    blobs: Arc<dyn BlobStore>,
    public_url: PublicUrl,
}

impl ImageService {
    pub fn new(blobs: Arc<dyn BlobStore>, public_url: PublicUrl) -> Self {
        Self { blobs, public_url }
    }

    /// Store an uploaded image under a fresh `{uuid}.{ext}` key.
    pub async fn upload(
        &self,
        original_filename: Option<&str>,
        content_type: Option<&str>,
        data: Bytes,
    ) -> Result<UploadedImage, AppError> {
        let content_type = content_type
            .filter(|ct| ALLOWED_CONTENT_TYPES.contains(ct))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Invalid file type. Allowed types: {}",
                    ALLOWED_CONTENT_TYPES.join(", ")
                ))
            })?;

        let key = format!("{}.{}", Uuid::new_v4(), extension_of(original_filename));
        let size = data.len();

        self.blobs
            .put(&key, data, content_type)
            .await
            .map_err(|e| {
                error!(key = %key, error = %e, "Image upload failed");
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to upload image: {}", e.message),
                    e,
                )
            })?;

        info!(key = %key, size, content_type, "Image uploaded");
        Ok(UploadedImage {
            url: self.public_url.for_key(&key),
            filename: key,
        })
    }

    /// Read an image back. Unknown or malformed keys are `NotFound`.
    pub async fn fetch(&self, key: &str) -> Result<ServedImage, AppError> {
        if !is_valid_key(key) {
            return Err(AppError::not_found("Image not found"));
        }

        let StoredBlob { data, content_type } = self.blobs.get(key).await.map_err(|e| {
            if e.kind == ErrorKind::NotFound {
                AppError::not_found("Image not found")
            } else {
                error!(key, error = %e, "Image retrieval failed");
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to retrieve image: {}", e.message),
                    e,
                )
            }
        })?;

        Ok(ServedImage {
            data,
            content_type: content_type.unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string()),
        })
    }

    pub async fn health_check(&self) -> Result<bool, AppError> {
        self.blobs.health_check().await
    }

    pub fn provider_type(&self) -> &str {
        self.blobs.provider_type()
    }
}

/// Text after the last `.` of the client filename, or `jpg` when there is
/// no usable extension.
fn extension_of(filename: Option<&str>) -> &str {
    filename
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.contains(['/', '\\']))
        .unwrap_or(DEFAULT_EXTENSION)
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['/', '\\']) && !key.contains("..")
}
