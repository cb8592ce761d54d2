use std::{net::SocketAddr, time::Duration};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
    pub web: WebContentConfig,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct WebContentConfig {
    pub fetch_timeout: Duration,
    pub snapshot_max_length: usize,
}

impl Default for WebContentConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(5),
            snapshot_max_length: 1_000,
        }
    }
}

/// Optional truncation applied to page-derived fields before they are
/// embedded in the prompt. Disabled unless configured.
#[derive(Debug, Clone, Default)]
pub struct PromptConfig {
    pub field_max_chars: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
