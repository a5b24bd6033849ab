//! # API Error Types

use thiserror::Error;

/// Errors raised by the HTTP transport
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] gloo_net::Error),

    #[error("Server responded {status} {status_text}: {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
}

impl ApiError {
    /// HTTP status for server-side failures
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(_) => None,
        }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
