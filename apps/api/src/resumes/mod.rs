// Saved-resume store: save, list, fetch and delete whole resumes.

pub mod handlers;
pub mod storage;
