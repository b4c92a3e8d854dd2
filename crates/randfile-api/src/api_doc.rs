//! OpenAPI documentation for the JSON endpoints.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use randfile_core::{models, naming};

/// Returns the OpenAPI spec served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Randfile API",
        version = "0.1.0",
        description = "Upload files to S3 under the randfile/ folder, keeping the original name, a random UUID name, or a custom prefix plus timestamp. The HTML form is served at /; JSON clients use /api/v0/uploads."
    ),
    paths(handlers::uploads::create_uploads),
    components(schemas(
        models::UploadSummary,
        models::UploadResult,
        models::UploadOutcome,
        naming::NamingMode,
        error::ErrorResponse
    )),
    tags((name = "uploads", description = "Batch file uploads"))
)]
pub struct ApiDoc;
