//! Error types for the ComicVine search client
//!
//! HTTP failures are translated into one of three kinds based solely on the
//! response status code. Transport and decoding failures get their own variants.

use thiserror::Error;

/// The kind of an HTTP-level API failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// HTTP 401, usually a missing or invalid API key
    Unauthorized,
    /// HTTP 403, usually a missing User-Agent header
    Forbidden,
    /// Any other non-success status
    Generic,
}

impl ErrorKind {
    /// Selects the error kind for a non-success HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            _ => ErrorKind::Generic,
        }
    }
}

/// Errors that can occur when searching the ComicVine API
#[derive(Debug, Error)]
pub enum SearchError {
    /// The API rejected the request as unauthorized (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The API rejected the request as forbidden (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The API returned some other non-success status
    #[error("API error: {0}")]
    Api(String),

    /// HTTP request failed before a status was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A configured header value could not be sent
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl SearchError {
    /// Builds the error for a non-success HTTP response
    ///
    /// The message is `"{status} {reason}"`. When the reason phrase is empty
    /// the trailing space is dropped.
    pub fn from_status(status: u16, reason: &str) -> Self {
        let message = format!("{} {}", status, reason).trim_end().to_string();

        match ErrorKind::from_status(status) {
            ErrorKind::Unauthorized => SearchError::Unauthorized(message),
            ErrorKind::Forbidden => SearchError::Forbidden(message),
            ErrorKind::Generic => SearchError::Api(message),
        }
    }

    /// Returns the HTTP error kind, or `None` for transport and decoding errors
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            SearchError::Unauthorized(_) => Some(ErrorKind::Unauthorized),
            SearchError::Forbidden(_) => Some(ErrorKind::Forbidden),
            SearchError::Api(_) => Some(ErrorKind::Generic),
            _ => None,
        }
    }
}
