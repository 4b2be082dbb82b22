//! Core traits defined in `listhub-core` and implemented by other crates.

pub mod storage;

pub use storage::{BlobStore, StoredBlob};
