use thiserror::Error;

/// Message shown when a failed load carries no usable text.
pub const GENERIC_LOAD_ERROR: &str = "Failed to load trend seeds. Please try again.";

/// Errors produced by the HTTP client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The reqwest client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("Request to '{url}' timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    /// No connection could be established within the connect timeout.
    #[error("Connecting to '{url}' timed out after {seconds}s")]
    ConnectTimeout { url: String, seconds: u64 },

    /// Network-level failure (DNS, connect, reset).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Request to '{url}' failed with status code {status}")]
    Status { url: String, status: u16 },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Decode { .. } => ErrorKind::Decode,
            ApiError::Build(_)
            | ApiError::Timeout { .. }
            | ApiError::ConnectTimeout { .. }
            | ApiError::Transport { .. }
            | ApiError::Status { .. } => ErrorKind::Transport,
        }
    }

    /// Text for the failed feed state.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_LOAD_ERROR.to_string()
        } else {
            message
        }
    }
}
