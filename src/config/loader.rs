use std::{env, net::SocketAddr, time::Duration};

use super::env::{
    AppConfig, ConfigError, DirectoryConfig, LoggingConfig, OpenAiConfig, PromptConfig,
    ServerConfig, WebContentConfig,
};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    /// Builds the config from any key lookup; `load_config` passes the
    /// process environment. Unparsable optional values fall back to their
    /// defaults, zero timeouts and limits count as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let positive = |key: &str| {
            var(key)
                .and_then(|value| value.parse::<u64>().ok())
                .filter(|n| *n > 0)
        };

        let bind_raw = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value: bind_raw.clone(),
            })?;

        let openai = OpenAiConfig {
            api_key: var("OPENAI_API_KEY"),
            model: var("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o".to_string()),
            api_url: var("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            request_timeout: positive("OPENAI_TIMEOUT").map(Duration::from_millis),
        };

        let directories = DirectoryConfig {
            logs_dir: var("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            file_name: var("LOG_FILE").unwrap_or_else(|| "sentinel.log".to_string()),
        };

        let defaults = WebContentConfig::default();
        let web = WebContentConfig {
            fetch_timeout: positive("WEBPAGE_FETCH_TIMEOUT")
                .map(Duration::from_millis)
                .unwrap_or(defaults.fetch_timeout),
            snapshot_max_length: positive("WEBPAGE_SNAPSHOT_MAX_LENGTH")
                .map(|n| n as usize)
                .unwrap_or(defaults.snapshot_max_length),
        };

        let prompt = PromptConfig {
            field_max_chars: positive("PROMPT_FIELD_MAX_CHARS").map(|n| n as usize),
        };

        Ok(Self {
            server: ServerConfig { bind_addr },
            openai,
            directories,
            logging,
            web,
            prompt,
        })
    }
}
