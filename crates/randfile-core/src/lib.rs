//! Randfile Core Library
//!
//! This crate provides the domain models, naming policy, error types, and
//! configuration shared by the storage, service, HTTP, and CLI crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod naming;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, S3Settings};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{UploadFile, UploadOutcome, UploadRequest, UploadResult, UploadSummary};
pub use naming::{CustomPrefix, NamingMode, NamingPolicy};
pub use storage_types::StorageBackend;
