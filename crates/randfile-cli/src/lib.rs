//! Helpers shared by the `randfile` command-line binary.

use std::path::{Path, PathBuf};

use anyhow::Context;
use randfile_core::{UploadFile, UploadOutcome, UploadResult};

/// Initialize tracing for CLI binaries. Logs go to stderr so stdout stays parseable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Name a file is uploaded under: the last component of its path.
pub fn upload_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Read every path into memory, in order. Any unreadable path aborts the run.
pub async fn read_upload_files(paths: &[PathBuf]) -> anyhow::Result<Vec<UploadFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        files.push(UploadFile::new(upload_name(path), content));
    }
    Ok(files)
}

/// One output line per result: `name -> url` on success, the error line otherwise.
pub fn format_result_line(result: &UploadResult) -> String {
    match &result.outcome {
        UploadOutcome::Uploaded { url } => format!("{} -> {}", result.original_name, url),
        UploadOutcome::Failed { .. } => result.error_message().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn upload_name_is_last_component() {
        assert_eq!(upload_name(Path::new("/tmp/dir/photo.png")), "photo.png");
        assert_eq!(upload_name(Path::new("notes.txt")), "notes.txt");
        assert_eq!(upload_name(Path::new("/")), "");
    }

    #[tokio::test]
    async fn read_upload_files_keeps_order_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("b.txt");
        let second = dir.path().join("a.bin");
        std::fs::File::create(&first)
            .unwrap()
            .write_all(b"bbb")
            .unwrap();
        std::fs::write(&second, b"").unwrap();

        let files = read_upload_files(&[first, second]).await.unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "b.txt");
        assert_eq!(files[0].size, 3);
        assert_eq!(files[1].name, "a.bin");
        assert_eq!(files[1].size, 0);
    }

    #[tokio::test]
    async fn read_upload_files_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = read_upload_files(&[missing]).await.unwrap_err();

        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn format_result_lines() {
        let ok = UploadResult::uploaded(
            "a.txt".to_string(),
            "randfile/a.txt".to_string(),
            "https://b.s3.r.amazonaws.com/randfile/a.txt".to_string(),
        );
        assert_eq!(
            format_result_line(&ok),
            "a.txt -> https://b.s3.r.amazonaws.com/randfile/a.txt"
        );

        let failed = UploadResult::failed(
            "b.txt".to_string(),
            "randfile/b.txt".to_string(),
            "Upload failed: timeout".to_string(),
        );
        assert_eq!(
            format_result_line(&failed),
            "Error uploading b.txt: Upload failed: timeout"
        );
    }
}
