//! Upload orchestration
//!
//! One call to [`UploadOrchestrator::process`] handles one submission. Each
//! file is named, stored and given a recorded outcome before the next one
//! starts, and a failed store never stops the batch.

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use randfile_core::naming::object_path;
use randfile_core::{NamingPolicy, UploadFile, UploadRequest, UploadResult};
use randfile_storage::Storage;

/// Runs upload batches against an explicitly provided storage backend.
#[derive(Clone)]
pub struct UploadOrchestrator {
    storage: Arc<dyn Storage>,
}

impl UploadOrchestrator {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Upload every file of `request` and return one result per file, in
    /// submission order.
    #[tracing::instrument(
        skip(self, request),
        fields(
            naming_mode = %request.policy().mode(),
            file_count = request.files().len(),
            backend = %self.storage.backend_type()
        )
    )]
    pub async fn process(&self, request: UploadRequest) -> Vec<UploadResult> {
        let (files, policy) = request.into_parts();
        let mut results = Vec::with_capacity(files.len());

        for file in files {
            results.push(self.upload_file(&policy, file).await);
        }

        let uploaded = results.iter().filter(|r| r.is_success()).count();
        tracing::info!(
            uploaded,
            failed = results.len() - uploaded,
            "Upload batch finished"
        );

        results
    }

    async fn upload_file(&self, policy: &NamingPolicy, file: UploadFile) -> UploadResult {
        // Taken per file, so a custom-named batch may straddle two seconds.
        let name = policy.object_name(&file.name, Local::now().naive_local());
        let key = object_path(&name);
        let start = Instant::now();

        match self.storage.upload_with_key(&key, file.content).await {
            Ok(url) => {
                tracing::info!(
                    original_name = %file.name,
                    key = %key,
                    size_bytes = file.size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "File uploaded"
                );
                UploadResult::uploaded(file.name, key, url)
            }
            Err(e) => {
                tracing::warn!(
                    original_name = %file.name,
                    key = %key,
                    size_bytes = file.size,
                    error = %e,
                    "File upload failed"
                );
                UploadResult::failed(file.name, key, e.to_string())
            }
        }
    }
}
