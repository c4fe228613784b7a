//! HTTP transport delegate.
//!
//! # Design
//! The single chokepoint every facade method goes through. `Transport` owns
//! the `ureq` agent (safe for concurrent use; per-call state lives in the
//! `RestRequest`), the base URL, and the precomputed `Basic` auth header.
//! The agent is built with `http_status_as_error(false)` so 4xx/5xx come
//! back as data and status classification happens in exactly one place:
//! [`interpret`], which is pure (status + body text in, envelope or typed
//! error out) and unit-testable without a socket. Reading the body to a
//! string on every path releases the underlying connection back to the
//! agent's pool.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use ureq::Agent;

use crate::error::Error;
use crate::request::{RestRequest, RESPONSE_ROOT};
use crate::response::ApiResponse;
use crate::responses::RestStatus;

/// Client identification header sent on every request.
pub const USER_AGENT: &str = concat!("messaging-core/", env!("CARGO_PKG_VERSION"));

/// Fixed anti-CSRF header value the vendor service requires.
const REQUESTED_BY: &str = "12345";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Executes requests against `baseUri + path` with the stored credentials.
#[derive(Debug, Clone)]
pub struct Transport {
    agent: Agent,
    base_url: String,
    authorization: String,
    default_timeout: Option<Duration>,
}

impl Transport {
    /// Create a transport for the given base URL and account credentials.
    /// A trailing slash on the base URL is trimmed; resource paths start
    /// with one.
    pub fn new(base_url: &str, account_id: &str, auth_token: &str) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        let credentials = STANDARD.encode(format!("{account_id}:{auth_token}"));
        Transport {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization: format!("Basic {credentials}"),
            default_timeout: None,
        }
    }

    /// Timeout applied to every call that does not carry its own.
    pub fn set_default_timeout(&mut self, timeout: Duration) {
        self.default_timeout = Some(timeout);
    }

    pub fn get<T: DeserializeOwned>(&self, request: &RestRequest) -> Result<ApiResponse<T>, Error> {
        self.dispatch(Method::Get, request)
    }

    pub fn post<T: DeserializeOwned>(&self, request: &RestRequest) -> Result<ApiResponse<T>, Error> {
        self.dispatch(Method::Post, request)
    }

    pub fn put<T: DeserializeOwned>(&self, request: &RestRequest) -> Result<ApiResponse<T>, Error> {
        self.dispatch(Method::Put, request)
    }

    pub fn delete<T: DeserializeOwned>(
        &self,
        request: &RestRequest,
    ) -> Result<ApiResponse<T>, Error> {
        self.dispatch(Method::Delete, request)
    }

    fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        request: &RestRequest,
    ) -> Result<ApiResponse<T>, Error> {
        let url = format!("{}{}", self.base_url, request.path());
        debug!("{} {url}", method.as_str());
        let (status, body) = self.execute(method, &url, request)?;
        debug!("{} {url} -> {status} ({} bytes)", method.as_str(), body.len());
        interpret(status, &body, request)
    }

    /// Perform the network round trip and read the body fully, so the
    /// connection is released no matter how classification turns out.
    fn execute(
        &self,
        method: Method,
        url: &str,
        request: &RestRequest,
    ) -> Result<(u16, String), Error> {
        let timeout = request.timeout_value().or(self.default_timeout);

        let result = match method {
            Method::Get | Method::Delete => {
                let mut builder = match method {
                    Method::Get => self.agent.get(url),
                    _ => self.agent.delete(url),
                };
                builder = self.common_headers(builder);
                for (key, value) in request.query_params() {
                    builder = builder.query(key, value);
                }
                if let Some(timeout) = timeout {
                    builder = builder.config().timeout_global(Some(timeout)).build();
                }
                builder.call()
            }
            Method::Post | Method::Put => {
                let mut builder = match method {
                    Method::Post => self.agent.post(url),
                    _ => self.agent.put(url),
                };
                builder = self.common_headers(builder);
                if let Some(timeout) = timeout {
                    builder = builder.config().timeout_global(Some(timeout)).build();
                }
                let body = serde_json::to_string(&request.body_json())
                    .map_err(|e| Error::Service(format!("failed to serialize request body: {e}")))?;
                builder.send(body.as_bytes())
            }
        };

        // With http_status_as_error disabled, an Err here means the call
        // never produced an HTTP response.
        let mut response = result.map_err(|e| Error::Io(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Error::Protocol(format!("failed to read response body: {e}")))?;
        Ok((status, body))
    }

    fn common_headers<Any>(&self, builder: ureq::RequestBuilder<Any>) -> ureq::RequestBuilder<Any> {
        builder
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("X-Requested-By", REQUESTED_BY)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &self.authorization)
    }
}

/// Classify a fully-read response into an envelope or a typed error.
///
/// 2xx parses as `T`, as does 404 on the endpoints that model "not found"
/// as data. 401 is an authentication failure regardless of body. Other 4xx
/// carry the vendor error envelope when the body holds one. Everything
/// else — 5xx included — is an unstructured service error.
pub(crate) fn interpret<T: DeserializeOwned>(
    status: u16,
    body: &str,
    request: &RestRequest,
) -> Result<ApiResponse<T>, Error> {
    if (200..300).contains(&status) || (status == 404 && request.tolerates_not_found()) {
        let payload = unwrap_root(body, request.response_root())?;
        let parsed = serde_json::from_value(payload)
            .map_err(|e| Error::Protocol(format!("malformed response payload: {e}")))?;
        return Ok(ApiResponse {
            status,
            body: parsed,
        });
    }
    if status == 401 {
        return Err(Error::Authentication);
    }
    if (400..500).contains(&status) {
        let envelope = unwrap_root(body, RESPONSE_ROOT)
            .and_then(|value| {
                serde_json::from_value::<RestStatus>(value)
                    .map_err(|e| Error::Protocol(e.to_string()))
            });
        return match envelope {
            Ok(error) => Err(Error::Client { status, error }),
            Err(_) => Err(Error::Service(format!("unexpected HTTP {status} response"))),
        };
    }
    Err(Error::Service(format!("unexpected HTTP {status} response")))
}

/// Remove the root element wrapping the payload. An empty body or a body
/// without the expected root is a protocol error.
fn unwrap_root(body: &str, root: &str) -> Result<Value, Error> {
    if body.is_empty() {
        return Err(Error::Protocol("response is empty".to_string()));
    }
    let mut value: Value = serde_json::from_str(body)
        .map_err(|e| Error::Protocol(format!("invalid JSON in response: {e}")))?;
    match value.get_mut(root) {
        Some(inner) => Ok(inner.take()),
        None => Err(Error::Protocol(format!(
            "response is missing the \"{root}\" root element"
        ))),
    }
}
