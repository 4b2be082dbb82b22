//! Blob storage configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which blob store backs image uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobProviderKind {
    /// S3-compatible object store (AWS, MinIO, ...).
    S3,
    /// Local filesystem directory.
    Local,
    /// Process memory; contents are lost on restart.
    Memory,
}

impl fmt::Display for BlobProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S3 => write!(f, "s3"),
            Self::Local => write!(f, "local"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Blob provider to use.
    #[serde(default = "default_provider")]
    pub provider: BlobProviderKind,
    /// Maximum upload size in bytes (default 10 MiB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Base used to build the public URL returned for uploaded images.
    ///
    /// Three forms are recognised: an absolute URL containing `/api/images`
    /// (reverse-proxied through this service), a relative path starting with
    /// `/api` (same-origin proxy), or any other URL (direct object-store
    /// access, bucket appended).
    #[serde(default = "default_public_url")]
    pub public_url: String,
    /// S3-compatible storage configuration.
    #[serde(default)]
    pub s3: S3StorageConfig,
    /// Local filesystem storage configuration.
    #[serde(default)]
    pub local: LocalStorageConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            max_upload_size_bytes: default_max_upload(),
            public_url: default_public_url(),
            s3: S3StorageConfig::default(),
            local: LocalStorageConfig::default(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3StorageConfig {
    /// S3 endpoint URL (for non-AWS services like MinIO).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3 bucket name.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
}

impl Default for S3StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            region: default_region(),
            bucket: default_bucket(),
            access_key: String::new(),
            secret_key: String::new(),
        }
    }
}

/// Local filesystem storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root path for stored images.
    #[serde(default = "default_local_root")]
    pub root_path: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
        }
    }
}

fn default_provider() -> BlobProviderKind {
    BlobProviderKind::S3
}

fn default_max_upload() -> u64 {
    10_485_760 // 10 MiB
}

fn default_public_url() -> String {
    "http://localhost:9000".to_string()
}

fn default_endpoint() -> String {
    "http://localhost:9000".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_bucket() -> String {
    "listhub".to_string()
}

fn default_local_root() -> String {
    "./data/images".to_string()
}
