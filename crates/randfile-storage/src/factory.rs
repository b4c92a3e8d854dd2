use crate::{MemoryStorage, S3Storage, Storage, StorageBackend};
use randfile_core::Config;
use std::sync::Arc;

/// Create a storage backend based on configuration
///
/// Never fails: S3 settings problems are reported by each upload instead.
pub fn create_storage(config: &Config) -> Arc<dyn Storage> {
    match config.storage_backend {
        StorageBackend::S3 => Arc::new(S3Storage::new(&config.s3)),
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; uploaded files are not persisted");
            Arc::new(MemoryStorage::new())
        }
    }
}
