//! Native HTTP transport using reqwest.
//!
//! One `reqwest::Client` is built per transport and reused for every call so
//! connections are pooled. No timeout is configured: a hung request suspends
//! its caller until the peer gives up.

use crate::executor::error::RequestError;
use crate::executor::Transport;
use crate::models::request::{HttpMethod, HttpRequest};
use crate::models::response::HttpResponse;
use std::collections::HashMap;
use std::time::Instant;

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with reqwest's default settings.
    pub fn new() -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| RequestError::Build(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        let start_time = Instant::now();

        let method = match request.method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
            HttpMethod::DELETE => reqwest::Method::DELETE,
            HttpMethod::PATCH => reqwest::Method::PATCH,
        };

        let mut req_builder = self.client.request(method, &request.url);

        for (name, value) in &request.headers {
            req_builder = req_builder.header(name, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let response = req_builder.send().await.map_err(|e| {
            if e.is_connect() {
                RequestError::Network(format!("Connection failed: {}", e))
            } else {
                RequestError::from(e)
            }
        })?;

        let status_code = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();
        let success = response.status().is_success();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.as_str().to_string(), value_str.to_string());
            }
        }

        // The body of an error response is only used for the error message,
        // so a failed read degrades to an empty body instead of masking the
        // status.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) if !success => {
                log::debug!(
                    "[{}] ignoring unreadable error body for status {}: {}",
                    request.id,
                    status_code,
                    e
                );
                Vec::new()
            }
            Err(e) => return Err(RequestError::Network(e.to_string())),
        };

        Ok(HttpResponse {
            status_code,
            status_text,
            headers,
            body,
            duration: start_time.elapsed(),
        })
    }
}
