//! In-process object store for local development and tests.

use crate::keys::object_location;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::memory::InMemory;
use object_store::{Error as ObjectStoreError, ObjectStoreExt, PutPayload};
use std::sync::Arc;

/// Memory storage implementation; objects vanish with the process.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    store: Arc<InMemory>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read back a stored object.
    pub async fn get(&self, storage_key: &str) -> StorageResult<Bytes> {
        let location = object_location(storage_key)?;
        let result = self.store.get(&location).await.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(storage_key.to_string()),
            other => StorageError::BackendError(other.to_string()),
        })?;
        result
            .bytes()
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn upload_with_key(&self, storage_key: &str, data: Bytes) -> StorageResult<String> {
        let location = object_location(storage_key)?;
        let size = data.len() as u64;

        self.store
            .put(&location, PutPayload::from(data))
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        tracing::debug!(key = %storage_key, size_bytes = size, "Memory upload successful");
        Ok(self.public_url(storage_key))
    }

    fn public_url(&self, storage_key: &str) -> String {
        format!("memory:///{}", storage_key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
