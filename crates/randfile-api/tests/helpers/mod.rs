//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p randfile-api`.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use bytes::Bytes;
use randfile_api::constants;
use randfile_api::setup::routes;
use randfile_api::state::AppState;
use randfile_core::Config;
use randfile_services::{
    s3_public_url, MemoryStorage, Storage, StorageBackend, StorageError, StorageResult,
    UploadOrchestrator,
};
use std::sync::{Arc, Mutex};

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Storage that records each key and rejects any key containing `fail`.
#[derive(Default)]
pub struct FlakyStorage {
    keys: Mutex<Vec<String>>,
}

impl FlakyStorage {
    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for FlakyStorage {
    async fn upload_with_key(&self, storage_key: &str, _data: Bytes) -> StorageResult<String> {
        self.keys.lock().unwrap().push(storage_key.to_string());
        if storage_key.contains("fail") {
            return Err(StorageError::UploadFailed("AccessDenied".to_string()));
        }
        Ok(self.public_url(storage_key))
    }

    fn public_url(&self, storage_key: &str) -> String {
        s3_public_url("mybucket", "us-east-1", storage_key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

/// Test application: server plus the storage it writes to.
pub struct TestApp<S> {
    pub server: TestServer,
    pub storage: Arc<S>,
}

impl<S> TestApp<S> {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

fn build<S: Storage + 'static>(storage: Arc<S>, config: Config) -> TestApp<S> {
    let state = Arc::new(AppState::new(UploadOrchestrator::new(storage.clone())));
    let router = routes::setup_routes(&config, state).expect("router");
    TestApp {
        server: TestServer::new(router).expect("test server"),
        storage,
    }
}

/// App over an in-memory store.
pub fn setup_memory_app() -> TestApp<MemoryStorage> {
    let config = Config {
        storage_backend: StorageBackend::Memory,
        ..Config::default()
    };
    build(Arc::new(MemoryStorage::new()), config)
}

/// App over [`FlakyStorage`].
pub fn setup_flaky_app() -> TestApp<FlakyStorage> {
    build(Arc::new(FlakyStorage::default()), Config::default())
}

/// App with a tiny body limit.
pub fn setup_limited_app(max_upload_size_bytes: usize) -> TestApp<MemoryStorage> {
    let config = Config {
        storage_backend: StorageBackend::Memory,
        max_upload_size_bytes,
        ..Config::default()
    };
    build(Arc::new(MemoryStorage::new()), config)
}

/// Multipart form with the given mode, optional prefix, and `(filename, content)` files.
pub fn upload_form(mode: &str, prefix: Option<&str>, files: &[(&str, &str)]) -> MultipartForm {
    let mut form = MultipartForm::new().add_text("naming_mode", mode.to_string());
    if let Some(prefix) = prefix {
        form = form.add_text("prefix", prefix.to_string());
    }
    for (name, content) in files {
        form = form.add_part(
            "files",
            Part::bytes(content.as_bytes().to_vec()).file_name(name.to_string()),
        );
    }
    form
}
