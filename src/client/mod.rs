//! API client for the vocabulary service.
//!
//! An [`ApiClient`] owns its connection settings (base URL and bearer token)
//! and a [`Transport`]. Every call goes through [`ApiClient::call`], which
//! joins the URL, applies default and caller headers, injects credentials,
//! and normalizes the response:
//!
//! - non-2xx: [`RequestError::Http`] carrying the body text, or `HTTP <status>`
//!   when the body is empty;
//! - 2xx with a JSON content type: the body decoded as the requested type;
//! - 2xx with anything else: the requested type decoded from `{}`, because
//!   some endpoints reply with an empty body on success.
//!
//! Calls make a single attempt. Nothing is retried and no timeout is applied.

pub mod endpoints;

use crate::auth;
use crate::executor::{validate_url, ReqwestTransport, RequestError, Transport};
use crate::models::request::{HttpMethod, HttpRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// Per-call options: body, extra headers, and which credentials to send.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    body: Option<String>,
    headers: Vec<(String, String)>,
    token: Option<String>,
    anonymous: bool,
}

impl CallOptions {
    /// Options for a call with no body and default headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `body` as the JSON request body.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, RequestError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    /// Adds a header. Overrides the default `Content-Type`; an
    /// `Authorization` header is ignored because credentials belong to the
    /// client.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Authenticates this call with `token` instead of the client's token.
    ///
    /// Lets a candidate token be checked before it is installed.
    pub fn bearer(mut self, token: &str) -> Self {
        self.token = auth::bearer::normalize_token(token);
        self
    }

    /// Sends the call without credentials even when a token is set.
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }
}

/// Client for one configured service endpoint.
#[derive(Debug)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    base_url: Option<String>,
    token: Option<String>,
}

impl ApiClient<ReqwestTransport> {
    /// Creates an unconfigured client using the reqwest transport.
    pub fn new() -> Result<Self, RequestError> {
        Ok(Self::with_transport(ReqwestTransport::new()?))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates an unconfigured client over an arbitrary transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            base_url: None,
            token: None,
        }
    }

    /// Sets the service base URL.
    ///
    /// Trailing slashes are dropped. `None` or an empty string clears the
    /// address, after which every call fails with
    /// [`RequestError::NotConfigured`].
    pub fn configure(&mut self, base_url: Option<&str>) {
        self.base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string);
    }

    /// Sets the bearer token. `None` or an empty string clears it.
    pub fn set_token(&mut self, token: Option<&str>) {
        self.token = token.and_then(auth::bearer::normalize_token);
    }

    /// Configured base URL, without trailing slash.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Current bearer token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a bearer token is set.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the request `call` would send, without sending it.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        options: &CallOptions,
    ) -> Result<HttpRequest, RequestError> {
        let base_url = self.base_url.as_deref().ok_or(RequestError::NotConfigured)?;
        let url = join_url(base_url, path);
        validate_url(&url)?;

        let mut request = HttpRequest::new(Uuid::new_v4().to_string(), method, url);
        request.set_header("Content-Type", "application/json".to_string());
        for (name, value) in &options.headers {
            request.set_header(name, value.clone());
        }

        let token = if options.anonymous {
            None
        } else {
            options.token.as_deref().or(self.token.as_deref())
        };
        auth::apply_bearer(&mut request, token);

        if let Some(body) = &options.body {
            request.set_body(body.clone());
        }

        Ok(request)
    }

    /// Calls `path` on the configured service and decodes the response.
    ///
    /// See the module documentation for how responses are normalized.
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        options: CallOptions,
    ) -> Result<R, RequestError> {
        let request = self.build_request(method, path, &options)?;
        log::debug!("[{}] {} {}", request.id, request.method, request.url);

        let response = self.transport.send(&request).await?;
        log::debug!(
            "[{}] {} {} in {:?}",
            request.id,
            response.status_code,
            response.status_text,
            response.duration
        );

        if !response.is_success() {
            let err = RequestError::http(response.status_code, &response.body_text());
            log::warn!("[{}] {} {} failed: {}", request.id, method, path, err);
            return Err(err);
        }

        if response.is_json() {
            Ok(serde_json::from_slice(&response.body)?)
        } else {
            Ok(serde_json::from_value(serde_json::Value::Object(
                serde_json::Map::new(),
            ))?)
        }
    }
}

/// Joins a base URL and an endpoint path with exactly one `/` between them.
///
/// # Examples
///
/// ```
/// use word_gpt_core::client::join_url;
///
/// assert_eq!(join_url("http://127.0.0.1:8000", "/health"), "http://127.0.0.1:8000/health");
/// assert_eq!(join_url("http://127.0.0.1:8000/", "health"), "http://127.0.0.1:8000/health");
/// ```
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
