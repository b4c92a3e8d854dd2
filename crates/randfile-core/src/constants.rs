//! Shared constants

/// Folder every uploaded object is placed under: `randfile/{name}`.
pub const UPLOAD_FOLDER: &str = "randfile";

/// strftime pattern of the custom-name timestamp suffix (second resolution).
pub const CUSTOM_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 200;
pub const DEFAULT_UPLOAD_CONCURRENCY: usize = 1;
