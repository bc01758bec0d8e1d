use thiserror::Error;

use crate::models::Section;

/// Errors raised by resume edits and (de)serialization.
#[derive(Debug, Error)]
pub enum EditError {
    /// Update or removal referenced an id that is not in the list.
    /// The resume is left exactly as it was.
    #[error("No {section} entry with id '{id}'")]
    NotFound { section: Section, id: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EditError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EditError::NotFound { .. })
    }
}
