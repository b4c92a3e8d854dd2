//! HTML upload form and its submit handler.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
};
use randfile_core::{AppError, ErrorMetadata, NamingMode};

use crate::error::{log_error, status_for};
use crate::pages::{self, FormView};
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

/// Serve the empty upload form.
pub async fn upload_form() -> Html<String> {
    Html(pages::render_form(&FormView::default()))
}

/// Handle a form submission and render the per-file results.
///
/// Validation failures re-render the form with the submitted choices and a
/// warning; nothing is uploaded in that case. Per-file store failures are part
/// of a normal 200 results page.
#[tracing::instrument(skip(state, multipart), fields(operation = "submit_upload_form"))]
pub async fn submit_upload_form(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Response {
    let form = match extract_upload_form(multipart).await {
        Ok(form) => form,
        Err(e) => return form_warning(NamingMode::default(), "", e),
    };

    let mode = form.selected_mode();
    let prefix = form.prefix.clone().unwrap_or_default();

    let request = match form.into_request() {
        Ok(request) => request,
        Err(e) => return form_warning(mode, &prefix, e),
    };

    let results = state.orchestrator.process(request).await;
    Html(pages::render_results(&results)).into_response()
}

fn form_warning(mode: NamingMode, prefix: &str, error: AppError) -> Response {
    log_error(&error);
    let message = error.client_message();
    let page = pages::render_form(&FormView {
        mode,
        prefix,
        warning: Some(&message),
    });
    (status_for(&error), Html(page)).into_response()
}
