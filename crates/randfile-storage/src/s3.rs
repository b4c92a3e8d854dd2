use crate::keys::object_location;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::{ObjectStoreExt, PutPayload, Result as ObjectResult};
use randfile_core::S3Settings;

/// Public URL of an S3 object: `https://{bucket}.s3.{region}.amazonaws.com/{key}`.
///
/// Virtual-hosted style only. The key is used verbatim, so keys containing
/// characters that need percent-encoding produce URLs that may not resolve.
pub fn s3_public_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
}

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    /// Builder error text when the settings could not produce a client; every
    /// upload then fails with it instead of the process refusing to start.
    store: Result<AmazonS3, String>,
    bucket: String,
    region: String,
}

impl S3Storage {
    /// Create a new S3Storage from explicit settings
    ///
    /// Absent values are left unset on the builder. When no access key is
    /// given, `object_store` falls back to its default credential chain.
    pub fn new(settings: &S3Settings) -> Self {
        let bucket = settings.bucket.clone().unwrap_or_default();
        let region = settings.region.clone().unwrap_or_default();

        let mut builder = AmazonS3Builder::new();
        if !bucket.is_empty() {
            builder = builder.with_bucket_name(bucket.clone());
        }
        if !region.is_empty() {
            builder = builder.with_region(region.clone());
        }
        if let Some(ref access_key_id) = settings.access_key_id {
            builder = builder.with_access_key_id(access_key_id.clone());
        }
        if let Some(ref secret_access_key) = settings.secret_access_key {
            builder = builder.with_secret_access_key(secret_access_key.clone());
        }

        let store = builder.build().map_err(|e| {
            tracing::warn!(
                error = %e,
                bucket = %bucket,
                region = %region,
                "S3 client could not be configured; uploads will fail until settings are fixed"
            );
            e.to_string()
        });

        S3Storage {
            store,
            bucket,
            region,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn upload_with_key(&self, storage_key: &str, data: Bytes) -> StorageResult<String> {
        let location = object_location(storage_key)?;
        let store = self
            .store
            .as_ref()
            .map_err(|e| StorageError::ConfigError(e.clone()))?;

        let size = data.len() as u64;
        let start = std::time::Instant::now();

        let result: ObjectResult<_> = store.put(&location, PutPayload::from(data)).await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %storage_key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        let url = self.public_url(storage_key);

        tracing::info!(
            bucket = %self.bucket,
            key = %storage_key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(url)
    }

    fn public_url(&self, storage_key: &str) -> String {
        s3_public_url(&self.bucket, &self.region, storage_key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(bucket: Option<&str>, region: Option<&str>) -> S3Settings {
        S3Settings {
            access_key_id: Some("AKIDEXAMPLE".to_string()),
            secret_access_key: Some("secret".to_string()),
            region: region.map(String::from),
            bucket: bucket.map(String::from),
        }
    }

    #[test]
    fn test_public_url_is_virtual_hosted() {
        assert_eq!(
            s3_public_url("mybucket", "us-east-1", "randfile/photo.png"),
            "https://mybucket.s3.us-east-1.amazonaws.com/randfile/photo.png"
        );
    }

    #[test]
    fn test_public_url_does_not_encode_key() {
        assert_eq!(
            s3_public_url("b", "eu-west-1", "randfile/my file#1.txt"),
            "https://b.s3.eu-west-1.amazonaws.com/randfile/my file#1.txt"
        );
    }

    #[test]
    fn test_storage_uses_configured_bucket_and_region() {
        let storage = S3Storage::new(&settings(Some("mybucket"), Some("us-east-1")));
        assert_eq!(storage.bucket(), "mybucket");
        assert_eq!(storage.region(), "us-east-1");
        assert_eq!(storage.backend_type(), StorageBackend::S3);
        assert_eq!(
            storage.public_url("randfile/a.txt"),
            "https://mybucket.s3.us-east-1.amazonaws.com/randfile/a.txt"
        );
    }

    #[tokio::test]
    async fn test_missing_bucket_fails_at_upload_time() {
        let storage = S3Storage::new(&settings(None, Some("us-east-1")));
        let err = storage
            .upload_with_key("randfile/a.txt", Bytes::from_static(b"data"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_invalid_key_rejected_before_network() {
        let storage = S3Storage::new(&settings(Some("mybucket"), Some("us-east-1")));
        let err = storage
            .upload_with_key("randfile/", Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));

        let err = storage
            .upload_with_key("randfile/..", Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }
}
