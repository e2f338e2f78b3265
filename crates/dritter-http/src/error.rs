//! Typed failure taxonomy for remote calls.

use serde::Deserialize;
use thiserror::Error;

/// Error envelope both backends return on failure paths.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, rename = "statusCode")]
    pub status_code: Option<u16>,
}

/// Error type for HTTP-layer and remote-service operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 401 after the bounded refresh attempt (or on the refresh itself).
    /// Carries the server-provided message, e.g. "Invalid credentials".
    #[error("{message}")]
    Unauthorized { message: String },

    /// 403, surfaced verbatim and never retried
    #[error("{message}")]
    Forbidden { message: String },

    /// No response received (connect failure, timeout)
    #[error("Network error. Please check your connection.")]
    Connectivity(#[source] reqwest::Error),

    /// Any other non-success status, message preferred from the server
    /// envelope with an `HTTP Error <status>` fallback
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Request could not be constructed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request body could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Token persistence failed after a successful refresh or login
    #[error(transparent)]
    Storage(#[from] dritter_storage::StorageError),
}

/// Result type alias using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map a non-success response into the taxonomy, preferring the server
    /// envelope message over the generic status fallback.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("HTTP Error {status}"));

        match status {
            401 => Self::Unauthorized { message },
            403 => Self::Forbidden { message },
            _ => Self::Status { status, message },
        }
    }
}
