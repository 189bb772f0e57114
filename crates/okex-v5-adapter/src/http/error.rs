/*
[INPUT]:  Error sources (transport, envelope codes, serialization, credentials, adapter)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the OKEx adapter
#[derive(Error, Debug)]
pub enum OkexError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport returned a non-2xx status
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Exchange returned a non-zero envelope code
    #[error("error[{code}]: {message}")]
    Api { code: String, message: String },

    /// Authenticated endpoint called on a client without credentials
    #[error("authenticated request attempted without credentials set")]
    AuthenticationRequired,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Query string encoding failed
    #[error("Query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required identifier in the request path was empty
    #[error("missing path parameter in {path}")]
    MissingPathParameter { path: String },

    /// Request exceeded the signed-timestamp window
    #[error("Request deadline exceeded after {}ms", .duration.as_millis())]
    Timeout { duration: Duration },

    /// Endpoint intentionally left unimplemented
    #[error("not yet implemented: {0}")]
    NotYetImplemented(&'static str),

    /// Order submission rejected before any request was sent
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Asset type not handled by the requested operation
    #[error("{asset} asset type unsupported for {operation}")]
    UnsupportedAsset {
        asset: String,
        operation: &'static str,
    },

    /// No ticker matched the requested pair
    #[error("ticker not found for {pair}")]
    TickerNotFound { pair: String },
}

impl OkexError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            OkexError::Http(_) | OkexError::Timeout { .. } => true,
            OkexError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
            }
            _ => false,
        }
    }

    /// Get retry delay in seconds (if retryable)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            OkexError::Status { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS.as_u16() => {
                Some(1)
            }
            OkexError::Timeout { .. } => Some(1),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            OkexError::AuthenticationRequired => true,
            OkexError::Status { status, .. } => *status == StatusCode::UNAUTHORIZED.as_u16(),
            // 501xx: key, signature and passphrase rejections
            OkexError::Api { code, .. } => code.starts_with("501"),
            _ => false,
        }
    }

    /// Create a transport error from a non-success status and body
    pub fn status_error(status: StatusCode, body: impl Into<String>) -> Self {
        OkexError::Status {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// Create an API error from envelope code and message
    pub fn api_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        OkexError::Api {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for OKEx operations
pub type Result<T> = std::result::Result<T, OkexError>;
