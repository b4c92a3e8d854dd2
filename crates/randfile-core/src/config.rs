//! Configuration module
//!
//! Everything is read once at startup from the process environment (with an
//! optional `.env` file). The AWS values are passed through untouched: a
//! missing bucket or credential is not a startup error and shows up as a
//! per-file failure when an upload is attempted.

use std::env;

use crate::constants::{DEFAULT_MAX_UPLOAD_SIZE_MB, DEFAULT_PORT, DEFAULT_UPLOAD_CONCURRENCY};
use crate::storage_types::StorageBackend;

/// Connection settings for the S3 client.
#[derive(Clone, Default)]
pub struct S3Settings {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: Option<String>,
    pub bucket: Option<String>,
}

// Hand-written so the secret never reaches logs.
impl std::fmt::Debug for S3Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Settings")
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "***"),
            )
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub max_upload_size_bytes: usize,
    /// Upload submissions handled at once; files inside one are always sequential.
    pub upload_concurrency: usize,
    pub storage_backend: StorageBackend,
    pub s3: S3Settings,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from any variable source; `from_env` passes the process environment.
    pub fn from_vars<F>(var: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|s| !s.trim().is_empty());

        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_PORT,
        };

        let max_upload_size_mb = var("MAX_UPLOAD_SIZE_MB")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB);

        let upload_concurrency = var("UPLOAD_CONCURRENCY")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_UPLOAD_CONCURRENCY)
            .max(1);

        let storage_backend = match non_empty("STORAGE_BACKEND") {
            Some(backend) => backend.parse()?,
            None => StorageBackend::default(),
        };

        let config = Config {
            server_port,
            environment,
            cors_origins,
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            upload_concurrency,
            storage_backend,
            s3: S3Settings {
                access_key_id: non_empty("AWS_ACCESS_KEY_ID"),
                secret_access_key: non_empty("AWS_SECRET_ACCESS_KEY"),
                region: non_empty("AWS_DEFAULT_REGION"),
                bucket: non_empty("S3_BUCKET_NAME"),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_MB * 1024 * 1024,
            upload_concurrency: DEFAULT_UPLOAD_CONCURRENCY,
            storage_backend: StorageBackend::default(),
            s3: S3Settings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_port, 8501);
        assert_eq!(config.environment, "development");
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.max_upload_size_bytes, 200 * 1024 * 1024);
        assert_eq!(config.upload_concurrency, 1);
        assert_eq!(config.storage_backend, StorageBackend::S3);
    }

    #[test]
    fn missing_aws_values_are_not_startup_errors() {
        let config = config_from(&[("S3_BUCKET_NAME", ""), ("AWS_DEFAULT_REGION", "  ")]).unwrap();
        assert!(config.s3.bucket.is_none());
        assert!(config.s3.region.is_none());
        assert!(config.s3.access_key_id.is_none());
        assert!(config.s3.secret_access_key.is_none());
    }

    #[test]
    fn reads_aws_settings() {
        let config = config_from(&[
            ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
            ("S3_BUCKET_NAME", "mybucket"),
        ])
        .unwrap();
        assert_eq!(config.s3.access_key_id.as_deref(), Some("AKIDEXAMPLE"));
        assert_eq!(config.s3.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.s3.bucket.as_deref(), Some("mybucket"));
        let debug = format!("{:?}", config.s3);
        assert!(!debug.contains("wJalrXUtnFEMI"));
    }

    #[test]
    fn invalid_port_fails_fast() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn wildcard_cors_rejected_in_production() {
        let err = config_from(&[("ENVIRONMENT", "production")]).unwrap_err();
        assert!(err.to_string().contains("CORS_ORIGINS"));

        let config = config_from(&[
            ("APP_ENV", "prod"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ])
        .unwrap();
        assert!(config.is_production());
        assert_eq!(config.cors_origins.len(), 2);
    }

    #[test]
    fn upload_concurrency_is_at_least_one() {
        let config = config_from(&[("UPLOAD_CONCURRENCY", "4")]).unwrap();
        assert_eq!(config.upload_concurrency, 4);
        let config = config_from(&[("UPLOAD_CONCURRENCY", "0")]).unwrap();
        assert_eq!(config.upload_concurrency, 1);
    }

    #[test]
    fn storage_backend_is_selectable() {
        let config = config_from(&[("STORAGE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert!(config_from(&[("STORAGE_BACKEND", "ftp")]).is_err());
    }
}
