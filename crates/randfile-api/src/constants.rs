//! API constants

/// Versioned prefix for JSON endpoints
pub const API_PREFIX: &str = "/api/v0";

/// Where the OpenAPI document is served
pub const OPENAPI_PATH: &str = "/api/openapi.json";

/// Form field carrying the naming mode (`original`, `random`, `custom`)
pub const FIELD_NAMING_MODE: &str = "naming_mode";

/// Form field carrying the custom prefix
pub const FIELD_PREFIX: &str = "prefix";

/// Form field carrying the files; repeated once per file
pub const FIELD_FILES: &str = "files";
