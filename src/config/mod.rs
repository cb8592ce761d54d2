pub mod env;
mod loader;

pub use env::{
    AppConfig, DirectoryConfig, LoggingConfig, OpenAiConfig, PromptConfig, WebContentConfig,
};
pub use loader::load_config;
