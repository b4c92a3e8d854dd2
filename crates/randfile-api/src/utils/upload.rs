//! Multipart parsing shared by the form and JSON upload handlers

use axum::extract::Multipart;
use randfile_core::{AppError, NamingMode, NamingPolicy, UploadFile, UploadRequest};

use crate::constants::{FIELD_FILES, FIELD_NAMING_MODE, FIELD_PREFIX};
use crate::error::multipart_error;

/// Raw upload form as submitted, before validation.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub naming_mode: Option<String>,
    pub prefix: Option<String>,
    pub files: Vec<UploadFile>,
}

impl UploadForm {
    /// Mode to pre-select when the form is shown again; unknown values fall back to the default.
    pub fn selected_mode(&self) -> NamingMode {
        self.naming_mode
            .as_deref()
            .and_then(|m| m.parse().ok())
            .unwrap_or_default()
    }

    /// Validate the form into an upload request.
    ///
    /// A missing or blank `naming_mode` means `original`. Custom mode requires
    /// a non-blank prefix and every mode requires at least one file.
    pub fn into_request(self) -> Result<UploadRequest, AppError> {
        let mode = match self.naming_mode.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => m.parse::<NamingMode>()?,
            _ => NamingMode::default(),
        };
        let policy = NamingPolicy::from_mode(mode, self.prefix.as_deref())?;
        UploadRequest::new(self.files, policy)
    }
}

/// Read every field of the upload form.
///
/// Repeated `files` fields are kept in submission order. A file part with no
/// filename and no content is what browsers send for an untouched picker and
/// is skipped. Unknown fields are ignored.
pub async fn extract_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            FIELD_NAMING_MODE => {
                form.naming_mode = Some(field.text().await.map_err(multipart_error)?);
            }
            FIELD_PREFIX => {
                form.prefix = Some(field.text().await.map_err(multipart_error)?);
            }
            FIELD_FILES => {
                let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
                let data = field.bytes().await.map_err(multipart_error)?;

                if filename.is_empty() && data.is_empty() {
                    continue;
                }
                form.files.push(UploadFile::new(filename, data));
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}
