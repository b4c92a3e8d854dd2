use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use randfile_core::UploadSummary;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

/// Upload a batch of files
///
/// Accepts the same multipart fields as the HTML form (`naming_mode`,
/// `prefix`, repeated `files`) and returns one result per file in submission
/// order. Store failures are reported per file with a 200; only an invalid
/// submission is rejected as a whole.
///
/// # Errors
/// - `AppError::InvalidInput` - Unknown naming mode, missing custom prefix, or no files
/// - `AppError::PayloadTooLarge` - Body exceeds `MAX_UPLOAD_SIZE_MB`
#[utoipa::path(
    post,
    path = "/api/v0/uploads",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Batch processed; see per-file results", body = UploadSummary),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "Upload too large", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "create_uploads"))]
pub async fn create_uploads(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadSummary>, HttpAppError> {
    let request = extract_upload_form(multipart).await?.into_request()?;
    let results = state.orchestrator.process(request).await;
    Ok(Json(UploadSummary::from(results)))
}
