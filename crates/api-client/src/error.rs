//! Error types for the API client

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// Every failed call resolves to exactly one of these; nothing is logged and
/// dropped inside the client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read
    /// (DNS failure, connection refused, timeout, interrupted body).
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived with a non-2xx status code
    #[error("API error ({status}): {message}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body text, as returned by the service
        message: String,
    },

    /// A JSON body could not be parsed or produced
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The file designated for upload could not be opened or inspected
    #[error("Cannot read upload file {}: {source}", path.display())]
    FileAccess {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Client configuration is unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog call was rejected before anything was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Discriminant of an [`ApiError`], for callers that branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Connection could not be established or was interrupted
    TransportFailure,
    /// Response status indicated failure
    HttpStatusError,
    /// JSON could not be parsed or produced
    SerializationError,
    /// Upload file could not be opened or stat'd
    FileAccessError,
    /// Client configuration error
    Config,
    /// Pre-dispatch validation failure
    InvalidRequest,
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a file access error for `path`
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// The failure class of this error
    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Transport(_) => ApiErrorKind::TransportFailure,
            Self::HttpStatus { .. } => ApiErrorKind::HttpStatusError,
            Self::Serialization(_) => ApiErrorKind::SerializationError,
            Self::FileAccess { .. } => ApiErrorKind::FileAccessError,
            Self::Config(_) => ApiErrorKind::Config,
            Self::InvalidRequest(_) => ApiErrorKind::InvalidRequest,
        }
    }

    /// HTTP status code, if a response was received
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if retrying the same call could succeed.
    ///
    /// The client never retries on its own; this is a hint for callers.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout(),
            // 5xx and 429 (rate limited)
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            Self::Serialization(_)
            | Self::FileAccess { .. }
            | Self::Config(_)
            | Self::InvalidRequest(_) => false,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if *status >= 500)
    }
}
