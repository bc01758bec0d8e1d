use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use editor::Resume;
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResumeResponse {
    pub message: String,
    pub resume_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /save-resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(resume): Json<Resume>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let saved = state.repository.save(resume, Utc::now()).await?;
    Ok(Json(SaveResumeResponse {
        message: "Resume saved successfully".to_string(),
        resume_id: saved.id,
        timestamp: saved.timestamp,
    }))
}

/// GET /resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<ResumeListResponse> {
    let resumes = state.repository.list_ids().await;
    Json(ResumeListResponse {
        count: resumes.len(),
        resumes,
    })
}

/// GET /resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.repository.get(&id).await?))
}

/// DELETE /resume/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.repository.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Resume deleted successfully".to_string(),
    }))
}
