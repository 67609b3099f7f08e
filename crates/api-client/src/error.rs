//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// Failures come in two classes. `Status` is the structured outcome of a
/// completed HTTP exchange with a non-2xx status; everything needed to react
/// (numeric status, display message, raw error body) travels with it.
/// `Transport` and `Json` are "the call itself failed" errors: the request
/// never produced a usable response body and is reported as-is.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP transport failed before a response could be read
    /// (DNS, connection refused, timeout, aborted body)
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A caller-supplied header name or value was not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Best-effort message: the error body's `message` field when
        /// present, otherwise the HTTP status text or a generic fallback
        message: String,
        /// Parsed JSON error body, when the response carried one
        body: Option<serde_json::Value>,
    },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a structured API status error
    pub fn status(status: u16, message: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self::Status {
            status,
            message: message.into(),
            body,
        }
    }

    /// The HTTP status code, for `Status` errors
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status >= 500)
    }

    /// Check if this is an authentication failure (401)
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// The message callers should surface to a user
    ///
    /// Prefers the error body's `message` field, then the error's own
    /// display text.
    #[must_use]
    pub fn display_message(&self) -> String {
        if let Self::Status { body: Some(body), .. } = self {
            if let Some(msg) = body.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }
        self.to_string()
    }
}
