//! S3-compatible object storage provider.
//!
//! Works against AWS S3 and self-hosted services such as MinIO. Requests use
//! path-style addressing so a custom endpoint needs no DNS setup per bucket.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{debug, info};

use listhub_core::config::S3StorageConfig;
use listhub_core::error::{AppError, ErrorKind};
use listhub_core::result::AppResult;
use listhub_core::traits::storage::{BlobStore, StoredBlob};

/// Blob store backed by one S3 bucket.
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    /// Build a client from static credentials.
    pub fn new(config: &S3StorageConfig) -> Self {
        info!(
            endpoint = %config.endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 blob store"
        );

        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "listhub-config",
        );
        let sdk_config = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(config.endpoint.clone())
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(sdk_config),
            bucket: config.bucket.clone(),
        }
    }

    /// The bucket objects are written to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                debug!(bucket = %self.bucket, error = %DisplayErrorContext(&e), "S3 health check failed");
                Ok(false)
            }
        }
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()> {
        let size = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| AppError::storage(format!("{}", DisplayErrorContext(&e))))?;

        debug!(key, size, content_type, bucket = %self.bucket, "Stored blob in S3");
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<StoredBlob> {
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_no_such_key() {
                    return Err(AppError::not_found(format!("Blob not found: {key}")));
                }
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("{}", DisplayErrorContext(&service_error)),
                    service_error,
                ));
            }
        };

        let content_type = output.content_type().map(str::to_string);
        let data = output
            .body
            .collect()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, format!("Failed to read {key}"), e))?
            .into_bytes();

        debug!(key, size = data.len(), bucket = %self.bucket, "Read blob from S3");
        Ok(StoredBlob { data, content_type })
    }
}
