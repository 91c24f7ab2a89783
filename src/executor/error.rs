//! Errors surfaced by service calls.
//!
//! The client never recovers from any of these; every failure is handed to
//! the caller, which owns user-facing messaging.

use std::fmt;

/// Errors that can occur while calling the service.
#[derive(Debug)]
pub enum RequestError {
    /// No service address is configured. Raised before any network I/O.
    NotConfigured,

    /// The joined URL could not be parsed or uses an unsupported scheme.
    InvalidUrl(String),

    /// The service answered with a non-2xx status.
    ///
    /// `message` is the response body text when non-empty, otherwise
    /// `HTTP <status>`.
    Http { status: u16, message: String },

    /// A response declared as JSON could not be decoded into the expected
    /// type, or a request body could not be serialized.
    Parse(String),

    /// Transport failure: DNS, refused connection, reset, etc.
    Network(String),

    /// The request could not be built by the transport.
    Build(String),
}

impl RequestError {
    /// Builds an [`RequestError::Http`] from a status and the (possibly
    /// empty) body text of the failed response.
    pub fn http(status: u16, body_text: &str) -> Self {
        let message = if body_text.is_empty() {
            format!("HTTP {}", status)
        } else {
            body_text.to_string()
        };
        RequestError::Http { status, message }
    }

    /// HTTP status of the failed response, if the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NotConfigured => write!(f, "service address not configured"),
            RequestError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            RequestError::Http { message, .. } => write!(f, "{}", message),
            RequestError::Parse(msg) => write!(f, "Invalid response body: {}", msg),
            RequestError::Network(msg) => write!(f, "Network error: {}", msg),
            RequestError::Build(msg) => write!(f, "Request build error: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// Convert reqwest errors to RequestError.
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            RequestError::Build(err.to_string())
        } else if err.is_decode() {
            RequestError::Parse(err.to_string())
        } else {
            RequestError::Network(err.to_string())
        }
    }
}

/// Convert URL parsing errors to RequestError.
impl From<url::ParseError> for RequestError {
    fn from(err: url::ParseError) -> Self {
        RequestError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Parse(err.to_string())
    }
}
