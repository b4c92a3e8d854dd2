//! Application setup and initialization
//!
//! Everything `main` needs to go from a loaded `Config` to a running router.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use randfile_core::Config;
use randfile_services::UploadOrchestrator;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(&config.environment)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let storage = storage::setup_storage(&config);
    let state = Arc::new(AppState::new(UploadOrchestrator::new(storage)));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
