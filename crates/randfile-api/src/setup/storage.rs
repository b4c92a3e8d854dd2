//! Storage backend setup

use randfile_core::{Config, StorageBackend};
use randfile_services::{create_storage, Storage};
use std::sync::Arc;

/// Build the storage backend the orchestrator writes through.
///
/// Missing AWS settings are only logged here; each upload reports them.
pub fn setup_storage(config: &Config) -> Arc<dyn Storage> {
    tracing::info!(backend = %config.storage_backend, "Initializing storage backend");

    if config.storage_backend == StorageBackend::S3 {
        let s3 = &config.s3;
        tracing::info!(
            bucket = s3.bucket.as_deref().unwrap_or("<unset>"),
            region = s3.region.as_deref().unwrap_or("<unset>"),
            credentials = s3.access_key_id.is_some() && s3.secret_access_key.is_some(),
            "S3 storage configured"
        );
        if s3.bucket.is_none() {
            tracing::warn!("S3_BUCKET_NAME is not set; every upload will fail until it is");
        }
    }

    create_storage(config)
}
