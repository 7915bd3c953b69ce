//! Core types and errors for the notification fetcher.

use thiserror::Error;

/// Errors that can occur while fetching and reporting notifications.
#[derive(Error, Debug)]
pub enum RasffError {
    #[error("Failed to encode search request: {0}")]
    Marshal(#[source] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Search endpoint returned HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Failed to parse response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RasffError {
    /// True for failures that happened on the wire rather than in our own encoding/decoding.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::UnexpectedStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, RasffError>;

/// Configuration for HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("rasffwatch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
