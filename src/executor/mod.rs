//! HTTP transport layer.
//!
//! The API client builds a fully resolved [`HttpRequest`] and hands it to a
//! [`Transport`]. Transports report every status code as a response; turning
//! non-2xx statuses into errors is the client's job. [`ReqwestTransport`] is
//! the production transport; tests substitute recording fakes.

pub mod error;
pub mod generation;
pub mod native;

pub use error::RequestError;
pub use generation::{GenerationGuard, RequestTicket};
pub use native::ReqwestTransport;

use crate::models::request::HttpRequest;
use crate::models::response::HttpResponse;
use std::future::Future;

/// Sends one request and returns the raw response.
///
/// Implementations must make exactly one attempt: no retries, no redirects
/// beyond what the underlying client does transparently.
pub trait Transport {
    /// Sends `request`.
    ///
    /// Returns `Err` only for transport failures (connection refused, DNS,
    /// unreadable success body). Any HTTP status, including 4xx/5xx, is an
    /// `Ok` response.
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, RequestError>> + Send;
}

/// Validates that the URL is well-formed and uses a supported protocol.
///
/// # Returns
///
/// `Ok(())` if the URL is valid, or `Err(RequestError)` if invalid.
pub fn validate_url(url: &str) -> Result<(), RequestError> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(RequestError::InvalidUrl(format!(
            "Only HTTP and HTTPS are supported, got: {}",
            scheme
        )));
    }

    Ok(())
}
