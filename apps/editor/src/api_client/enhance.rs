use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api_client::{ApiClient, ClientError, ENHANCE_PATH};

pub const SUMMARY_SECTION: &str = "summary";
pub const EXPERIENCE_SECTION: &str = "experience";

#[derive(Debug, Serialize)]
struct EnhanceRequest<'a> {
    section: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnhanceResponse {
    enhanced_content: String,
}

/// Replacement text for a field, and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enhancement {
    /// Returned verbatim by the remote enhancer.
    Remote(String),
    /// Produced locally because the remote enhancer was unavailable.
    Fallback(String),
}

impl Enhancement {
    pub fn text(&self) -> &str {
        match self {
            Enhancement::Remote(text) | Enhancement::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Enhancement::Remote(text) | Enhancement::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Enhancement::Fallback(_))
    }
}

/// Deterministic stand-in used whenever the remote enhancer fails.
pub fn fallback_text(content: &str) -> String {
    format!("Enhanced: {content} (AI enhancement temporarily unavailable)")
}

/// Rewrites a free-text field. Always resolves.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance(&self, section: &str, content: &str) -> Enhancement;
}

impl ApiClient {
    /// One POST to the enhance endpoint. Errors are returned, not recovered.
    pub async fn request_enhancement(
        &self,
        section: &str,
        content: &str,
    ) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.config.endpoint(ENHANCE_PATH))
            .json(&EnhanceRequest { section, content })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: EnhanceResponse = serde_json::from_str(&body)?;
        Ok(parsed.enhanced_content)
    }
}

#[async_trait]
impl Enhancer for ApiClient {
    async fn enhance(&self, section: &str, content: &str) -> Enhancement {
        match self.request_enhancement(section, content).await {
            Ok(text) => {
                debug!("Enhanced section '{}' ({} chars)", section, text.len());
                Enhancement::Remote(text)
            }
            Err(e) => {
                warn!("Enhancement of '{}' failed, using local fallback: {}", section, e);
                Enhancement::Fallback(fallback_text(content))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::test_support::{dead_base_url, serve};
    use crate::api_client::ClientConfig;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    fn client(base_url: String) -> ApiClient {
        ApiClient::new(ClientConfig::with_base_url(base_url)).unwrap()
    }

    #[tokio::test]
    async fn test_remote_text_returned_verbatim() {
        let router = Router::new().route(
            "/ai-enhance",
            post(|Json(body): Json<Value>| async move {
                let text = format!("[{}] {}", body["section"].as_str().unwrap(), body["content"].as_str().unwrap());
                Json(json!({ "enhancedContent": text }))
            }),
        );
        let api = client(serve(router).await);

        let result = api.enhance("summary", "Rust developer").await;
        assert_eq!(result, Enhancement::Remote("[summary] Rust developer".into()));
    }

    #[tokio::test]
    async fn test_server_error_falls_back() {
        let router = Router::new().route(
            "/ai-enhance",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let api = client(serve(router).await);

        let result = api.enhance("summary", "X").await;
        assert!(result.is_fallback());
        assert!(result.text().contains('X'));
        assert_eq!(result.text(), fallback_text("X"));
    }

    #[tokio::test]
    async fn test_missing_field_falls_back() {
        let router = Router::new().route(
            "/ai-enhance",
            post(|| async { Json(json!({ "text": "wrong shape" })) }),
        );
        let api = client(serve(router).await);

        let err = api.request_enhancement("experience", "Led a team").await.unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));

        let result = api.enhance("experience", "Led a team").await;
        assert_eq!(result, Enhancement::Fallback(fallback_text("Led a team")));
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back() {
        let api = client(dead_base_url().await);

        let err = api.request_enhancement("summary", "X").await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));

        let result = api.enhance("summary", "X").await;
        assert!(result.is_fallback());
        assert!(result.into_text().contains('X'));
    }

    #[tokio::test]
    async fn test_status_error_keeps_code() {
        let router = Router::new().route(
            "/ai-enhance",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "later") }),
        );
        let api = client(serve(router).await);

        match api.request_enhancement("summary", "X").await {
            Err(ClientError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "later");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
