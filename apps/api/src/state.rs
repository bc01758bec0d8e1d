use std::sync::Arc;

use crate::resumes::storage::ResumeRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<ResumeRepository>,
}
