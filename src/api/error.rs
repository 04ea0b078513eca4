//! Error types for the shop and profile service clients.

use thiserror::Error;

/// Errors returned by a remote service call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Failed to reach the service
    #[error("Connection to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Service answered with a non-success status
    #[error("Service error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The client could not be constructed
    #[error("Client setup failed: {0}")]
    Setup(String),
}

impl ServiceError {
    /// Whether repeating the same call could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ServiceError::Transport { .. } | ServiceError::Timeout { .. } => true,
            ServiceError::Status { status, .. } => *status >= 500 || *status == 429,
            ServiceError::Decode(_) | ServiceError::Setup(_) => false,
        }
    }

    /// Short error kind string for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Transport { .. } => "transport",
            ServiceError::Timeout { .. } => "timeout",
            ServiceError::Status { .. } => "status",
            ServiceError::Decode(_) => "decode",
            ServiceError::Setup(_) => "setup",
        }
    }
}
