//! Client error types

use thiserror::Error;

/// Client error type
///
/// Every variant is a network failure from the dashboard's point of view:
/// the request did not complete with a usable 2xx response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 401 from the API
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// 403 from the API
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404 from the API
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400 from the API (server-side validation)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status code carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Validation(_) => Some(400),
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the failure happened before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(e) if e.status().is_none())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
