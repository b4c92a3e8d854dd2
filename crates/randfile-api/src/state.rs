//! Shared application state handed to every handler.

use randfile_services::UploadOrchestrator;

pub struct AppState {
    pub orchestrator: UploadOrchestrator,
}

impl AppState {
    pub fn new(orchestrator: UploadOrchestrator) -> Self {
        Self { orchestrator }
    }
}
