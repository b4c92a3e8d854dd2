use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::naming::NamingPolicy;

/// One file picked by the user, held in memory for the duration of a submission.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub size: u64,
    pub content: Bytes,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            size: content.len() as u64,
            content,
        }
    }
}

/// A validated submission: at least one file and a usable naming policy.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    files: Vec<UploadFile>,
    policy: NamingPolicy,
}

impl UploadRequest {
    pub fn new(files: Vec<UploadFile>, policy: NamingPolicy) -> Result<Self, AppError> {
        if files.is_empty() {
            return Err(AppError::InvalidInput(
                "Please select at least one file to upload".to_string(),
            ));
        }
        Ok(Self { files, policy })
    }

    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    pub fn policy(&self) -> &NamingPolicy {
        &self.policy
    }

    pub fn into_parts(self) -> (Vec<UploadFile>, NamingPolicy) {
        (self.files, self.policy)
    }
}

/// Outcome of a single store attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadOutcome {
    Uploaded { url: String },
    Failed { message: String },
}

/// Per-file result, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UploadResult {
    /// Filename as submitted
    pub original_name: String,
    /// Full object key the file was (or would have been) stored under
    pub object_key: String,
    pub outcome: UploadOutcome,
}

impl UploadResult {
    pub fn uploaded(original_name: String, object_key: String, url: String) -> Self {
        Self {
            original_name,
            object_key,
            outcome: UploadOutcome::Uploaded { url },
        }
    }

    pub fn failed(original_name: String, object_key: String, message: String) -> Self {
        Self {
            original_name,
            object_key,
            outcome: UploadOutcome::Failed { message },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, UploadOutcome::Uploaded { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match &self.outcome {
            UploadOutcome::Uploaded { url } => Some(url),
            UploadOutcome::Failed { .. } => None,
        }
    }

    /// Display line for a failed upload, e.g. `Error uploading a.txt: Upload failed: ...`.
    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            UploadOutcome::Uploaded { .. } => None,
            UploadOutcome::Failed { message } => Some(format!(
                "Error uploading {}: {}",
                self.original_name, message
            )),
        }
    }
}

/// Results of one submission plus counts, as returned to JSON clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadSummary {
    pub uploaded: usize,
    pub failed: usize,
    pub results: Vec<UploadResult>,
}

impl From<Vec<UploadResult>> for UploadSummary {
    fn from(results: Vec<UploadResult>) -> Self {
        let uploaded = results.iter().filter(|r| r.is_success()).count();
        Self {
            uploaded,
            failed: results.len() - uploaded,
            results,
        }
    }
}
