use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::{config::OpenAiConfig, infrastructure::errors::error_chain};

use super::inference::{build_request, parse_response};

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY must be configured for site classification")]
    MissingApiKey,
    #[error("completion request timed out: {0}")]
    Timeout(String),
    #[error("completion request failed: {0}")]
    Http(String),
    #[error("completion service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed completion response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CompletionError::Timeout(error_chain(&err))
        } else {
            CompletionError::Http(error_chain(&err))
        }
    }
}

/// A stateless single-turn text completion endpoint.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// OpenAI-compatible `chat/completions` client.
#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(http: Client, config: OpenAiConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(CompletionError::MissingApiKey)?;

        let request = build_request(self.config.model.clone(), prompt);
        let mut builder = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&request);
        if let Some(timeout) = self.config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(response).await
    }
}
