use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::infrastructure::errors::error_chain;

/// Raw result of a single GET.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        if err.is_timeout() {
            TransportError::Timeout(message)
        } else if err.is_connect() {
            TransportError::Connect(message)
        } else {
            TransportError::Request(message)
        }
    }
}

#[async_trait]
pub trait PageTransport: Send + Sync {
    async fn get(&self, url: &str, timeout: Duration) -> Result<FetchedPage, TransportError>;
}

/// `PageTransport` backed by the shared reqwest client. Redirects follow
/// the client's default policy.
pub struct HttpPageTransport {
    client: Client,
}

impl HttpPageTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageTransport for HttpPageTransport {
    async fn get(&self, raw_url: &str, timeout: Duration) -> Result<FetchedPage, TransportError> {
        let url = Url::parse(raw_url).map_err(|err| TransportError::InvalidUrl {
            url: raw_url.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TransportError::UnsupportedScheme(url.scheme().to_string()));
        }

        let response = self.client.get(url).timeout(timeout).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchedPage { status, body })
    }
}
