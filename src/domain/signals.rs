use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NO_TITLE: &str = "No Title";

/// Signals pulled from a single fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSignals {
    pub url: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub snapshot: String,
}

/// Outcome of one extraction. A failed extraction carries no page fields.
pub type Extraction = Result<SiteSignals, ExtractError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnreachableReason {
    Status(u16),
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Site not reachable")]
    Unreachable(UnreachableReason),
}

impl ExtractError {
    pub fn status(code: u16) -> Self {
        Self::Unreachable(UnreachableReason::Status(code))
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Unreachable(UnreachableReason::Transport(message.into()))
    }

    /// Underlying status or transport message, for server-side logs.
    pub fn detail(&self) -> String {
        match self {
            Self::Unreachable(UnreachableReason::Status(code)) => format!("HTTP status {code}"),
            Self::Unreachable(UnreachableReason::Transport(message)) => message.clone(),
        }
    }
}
