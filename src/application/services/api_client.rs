//! JSON request helper
//!
//! Builds requests against the catalog base URL, sends them through the
//! [`HttpTransport`] boundary and classifies the response.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Method, ResourcePath};
use crate::infrastructure::traits::{HttpRequest, HttpResponse, HttpTransport};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Outcome of a successful request.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// 2xx with a parsed JSON body
    Json(Value),
    /// 204, `Content-Length: 0`, or a zero-length body
    Empty,
}

impl Reply {
    /// JSON payload, treating `null` the same as no content.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Reply::Json(Value::Null) | Reply::Empty => None,
            Reply::Json(value) => Some(value),
        }
    }
}

/// Sends one JSON request per call. No retries.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    /// Extra headers sent with every request (from settings).
    headers: Vec<(String, String)>,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        headers: Vec<(String, String)>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            headers,
        }
    }

    /// Absolute URL of a resource, e.g. `https://host/products/3`.
    pub fn url_for(&self, resource: &ResourcePath) -> String {
        format!("{}{}", self.base_url, resource.to_api_path())
    }

    /// Send a request without a body.
    pub fn fetch(
        &self,
        url: &str,
        method: Method,
        headers: &[(String, String)],
    ) -> ApplicationResult<Reply> {
        self.execute(url, method, None, headers)
    }

    /// Send a request with `body` serialized as JSON.
    pub fn fetch_with_body<B: Serialize + ?Sized>(
        &self,
        url: &str,
        method: Method,
        body: &B,
        headers: &[(String, String)],
    ) -> ApplicationResult<Reply> {
        let body = serde_json::to_string(body).map_err(ApplicationError::Encode)?;
        self.execute(url, method, Some(body), headers)
    }

    fn execute(
        &self,
        url: &str,
        method: Method,
        body: Option<String>,
        headers: &[(String, String)],
    ) -> ApplicationResult<Reply> {
        let mut merged = vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())];
        merge_headers(&mut merged, &self.headers);
        merge_headers(&mut merged, headers);

        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers: merged,
            body,
        };
        debug!("fetch: {} {}", request.method, request.url);

        let response = self
            .transport
            .send(&request)
            .map_err(|source| ApplicationError::Transport {
                context: format!("{} {}", method, url),
                source,
            })?;

        classify(method, url, response)
    }
}

/// Insert or replace headers; names compare case-insensitively.
fn merge_headers(target: &mut Vec<(String, String)>, extra: &[(String, String)]) {
    for (name, value) in extra {
        match target
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(slot) => *slot = (name.clone(), value.clone()),
            None => target.push((name.clone(), value.clone())),
        }
    }
}

fn classify(method: Method, url: &str, response: HttpResponse) -> ApplicationResult<Reply> {
    debug!(
        "classify: status={} content_length={:?}",
        response.status, response.content_length
    );
    if !(200..300).contains(&response.status) {
        return Err(ApplicationError::HttpStatus {
            status: response.status,
            body: response.body,
        });
    }
    if response.status == 204 || response.content_length == Some(0) || response.body.is_empty() {
        return Ok(Reply::Empty);
    }
    serde_json::from_str(&response.body)
        .map(Reply::Json)
        .map_err(|source| ApplicationError::Decode {
            context: format!("{} {}", method, url),
            source,
        })
}
