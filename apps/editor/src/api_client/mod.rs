//! HTTP client for the resume backend: text enhancement and persistence.
//!
//! Neither public operation fails from the caller's point of view. Enhancement
//! degrades to local fallback text, persistence to `false`. Transport detail is
//! logged and dropped here.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

pub mod enhance;
pub mod persistence;

pub use enhance::{fallback_text, Enhancement, Enhancer, EXPERIENCE_SECTION, SUMMARY_SECTION};
pub use persistence::ResumeSink;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const ENHANCE_PATH: &str = "ai-enhance";
const SAVE_PATH: &str = "save-resume";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Talks to the resume backend. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ClientConfig::with_base_url("http://localhost:8000/");
        assert_eq!(
            config.endpoint(ENHANCE_PATH),
            "http://localhost:8000/ai-enhance"
        );
        assert_eq!(
            ClientConfig::default().endpoint(SAVE_PATH),
            "http://localhost:8000/save-resume"
        );
    }

    #[test]
    fn test_client_keeps_its_config() {
        let mut config = ClientConfig::with_base_url("http://backend:9000");
        config.timeout = Duration::from_secs(5);
        let client = ApiClient::new(config).unwrap();
        assert_eq!(client.config().base_url, "http://backend:9000");
        assert_eq!(client.config().timeout, Duration::from_secs(5));
    }
}
