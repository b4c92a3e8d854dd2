//! Randfile Services Layer
//!
//! This crate hosts the upload orchestration and re-exports the storage API so
//! the HTTP and CLI crates depend on a single service facade. Keep batch logic
//! here; keep request parsing and rendering in the surfaces.

pub mod upload;

pub use randfile_storage::{
    create_storage, s3_public_url, MemoryStorage, S3Storage, Storage, StorageBackend,
    StorageError, StorageResult,
};
pub use upload::UploadOrchestrator;
