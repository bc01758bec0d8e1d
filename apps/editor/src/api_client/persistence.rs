use async_trait::async_trait;
use tracing::{info, warn};

use crate::api_client::{ApiClient, ClientError, SAVE_PATH};
use crate::models::Resume;

/// Remote store for whole resumes. `true` only when the store accepted it.
#[async_trait]
pub trait ResumeSink: Send + Sync {
    async fn save(&self, resume: &Resume) -> bool;
}

impl ApiClient {
    /// POSTs the full resume. Success is decided by status class alone;
    /// the response body is never read.
    pub async fn submit_resume(&self, resume: &Resume) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.config.endpoint(SAVE_PATH))
            .json(resume)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: String::new(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ResumeSink for ApiClient {
    async fn save(&self, resume: &Resume) -> bool {
        match self.submit_resume(resume).await {
            Ok(()) => {
                info!("Saved resume for '{}'", resume.personal_info.name);
                true
            }
            Err(e) => {
                warn!("Save failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::test_support::{dead_base_url, serve};
    use crate::api_client::ClientConfig;
    use crate::document::sample_resume;
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use chrono::Utc;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    fn client(base_url: String) -> ApiClient {
        ApiClient::new(ClientConfig::with_base_url(base_url)).unwrap()
    }

    #[tokio::test]
    async fn test_save_success_sends_full_resume() {
        let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let router = Router::new()
            .route(
                "/save-resume",
                post(
                    |State(slot): State<Arc<Mutex<Option<Value>>>>, Json(body): Json<Value>| async move {
                        *slot.lock().unwrap() = Some(body);
                        StatusCode::OK
                    },
                ),
            )
            .with_state(received.clone());
        let api = client(serve(router).await);
        let resume = sample_resume(Utc::now());

        assert!(api.save(&resume).await);

        let body = received.lock().unwrap().take().unwrap();
        assert_eq!(body["personalInfo"]["name"], "John Doe");
        assert_eq!(body["experiences"].as_array().unwrap().len(), 2);
        assert_eq!(body["skills"][0]["level"], "Expert");
        let echoed: Resume = serde_json::from_value(body).unwrap();
        assert_eq!(echoed, resume);
    }

    #[tokio::test]
    async fn test_save_server_error_is_false() {
        let router = Router::new().route(
            "/save-resume",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let api = client(serve(router).await);

        assert!(!api.save(&sample_resume(Utc::now())).await);
    }

    #[tokio::test]
    async fn test_save_ignores_response_body() {
        let router = Router::new().route("/save-resume", post(|| async { "not json at all" }));
        let api = client(serve(router).await);

        assert!(api.save(&sample_resume(Utc::now())).await);
    }

    #[tokio::test]
    async fn test_save_unreachable_is_false() {
        let api = client(dead_base_url().await);
        assert!(!api.save(&sample_resume(Utc::now())).await);
    }
}
