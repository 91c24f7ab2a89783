//! Outbound HTTP request model.
//!
//! A `HttpRequest` is the fully resolved request the API client hands to a
//! transport: absolute URL, final header set and serialized body.

use std::collections::HashMap;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to the service
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP DELETE method - remove a resource
    DELETE,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request ready to be sent by a [`Transport`](crate::executor::Transport).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Identifier used to correlate log lines for one call.
    pub id: String,

    /// HTTP method.
    pub method: HttpMethod,

    /// Absolute target URL (base URL joined with the endpoint path).
    pub url: String,

    /// Request headers as key-value pairs.
    ///
    /// Names are stored as provided; lookups through [`HttpRequest::header`]
    /// are case-insensitive.
    pub headers: HashMap<String, String>,

    /// Optional serialized body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a new request with no headers and no body.
    pub fn new(id: String, method: HttpMethod, url: String) -> Self {
        Self {
            id,
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any existing header with the same name
    /// regardless of case.
    pub fn set_header(&mut self, name: &str, value: String) {
        self.remove_header(name);
        self.headers.insert(name.to_string(), value);
    }

    /// Removes every header matching `name` case-insensitively.
    pub fn remove_header(&mut self, name: &str) {
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(name));
    }

    /// Looks up a header value case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Sets the request body.
    pub fn set_body(&mut self, body: String) {
        self.body = Some(body);
    }

    /// Gets the Content-Type header value if present.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}
