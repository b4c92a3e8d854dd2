//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// The orchestrator holds an `Arc<dyn Storage>` so tests and local development
/// can swap the S3 backend for any other implementation.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `storage_key` and return the object's public URL.
    ///
    /// No ACL and no content type are set on the object; whether the URL is
    /// fetchable depends on the bucket's own policy.
    async fn upload_with_key(&self, storage_key: &str, data: Bytes) -> StorageResult<String>;

    /// Public URL for `storage_key`, whether or not the object exists.
    fn public_url(&self, storage_key: &str) -> String;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
