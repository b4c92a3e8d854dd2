//! Randfile Storage Library
//!
//! This crate provides the `Storage` abstraction the upload orchestrator writes
//! through, with an S3 backend and an in-memory backend.
//!
//! # Object URLs
//!
//! Each backend composes the public URL of an object itself. For S3 this is the
//! virtual-hosted form `https://{bucket}.s3.{region}.amazonaws.com/{key}`, built by
//! plain string concatenation (keys are not percent-encoded).

pub mod factory;
pub(crate) mod keys;
pub mod memory;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use memory::MemoryStorage;
pub use randfile_core::StorageBackend;
pub use s3::{s3_public_url, S3Storage};
pub use traits::{Storage, StorageError, StorageResult};
