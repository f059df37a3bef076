//! I/O boundary traits for testability
//!
//! The HTTP transport is abstracted so that services can be tested
//! with mock implementations that record requests and replay canned responses.

use reqwest::header::CONTENT_LENGTH;
use tracing::{debug, instrument};

use crate::domain::Method;
use crate::infrastructure::{InfraError, InfraResult};

/// Boxed error returned by transports (network failures, TLS, etc.).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A fully prepared HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Headers in send order; names are unique (case-insensitive).
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

/// Raw response as received from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Value of the `Content-Length` header, if present and numeric.
    pub content_length: Option<u64>,
    pub body: String,
}

/// HTTP transport abstraction.
pub trait HttpTransport: Send + Sync {
    /// Send one request and return the raw response.
    /// Any status code is a successful send; only transport failures are errors.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Blocking reqwest transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> InfraResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InfraError::HttpClient {
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    #[instrument(level = "debug", skip(self, request), fields(method = %request.method, url = %request.url))]
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let content_length = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());
        let body = response.text()?;
        debug!("status={} content_length={:?} bytes={}", status, content_length, body.len());

        Ok(HttpResponse {
            status,
            content_length,
            body,
        })
    }
}
