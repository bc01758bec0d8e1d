use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::enhance::enhance_content;
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub enhanced_content: String,
}

/// POST /ai-enhance
pub async fn handle_enhance(
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    info!(
        "Enhancing section '{}' ({} chars)",
        request.section,
        request.content.len()
    );
    Ok(Json(EnhanceResponse {
        enhanced_content: enhance_content(&request.section, &request.content),
    }))
}
