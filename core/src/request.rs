//! Request accumulator for the messaging REST service.
//!
//! # Design
//! `RestRequest` is a plain in-memory accumulator: a resource path plus
//! everything the transport needs to dispatch one call (query parameters,
//! ordered body parameters, an optional timeout, the JSON root wrapper for
//! the body, the expected root of the response). Builder methods mutate and
//! return `self` so facades can chain them; duplicate keys overwrite in
//! place, and inspecting a request never changes it. No I/O happens here.

use std::time::Duration;

use serde_json::{Map, Value};

/// The JSON root key that wraps every response payload, except where an
/// endpoint overrides it via [`RestRequest::expect_root`].
pub const RESPONSE_ROOT: &str = "response";

/// Everything needed to build one HTTP call before it is dispatched.
#[derive(Debug, Clone)]
pub struct RestRequest {
    path: String,
    query: Vec<(String, String)>,
    body: Map<String, Value>,
    timeout: Option<Duration>,
    wrapper: Option<String>,
    response_root: String,
    tolerate_not_found: bool,
}

impl RestRequest {
    /// Create a request for the given resource path. Parameter maps start
    /// empty so callers can always add to them.
    pub fn new(path: impl Into<String>) -> Self {
        RestRequest {
            path: path.into(),
            query: Vec::new(),
            body: Map::new(),
            timeout: None,
            wrapper: None,
            response_root: RESPONSE_ROOT.to_string(),
            tolerate_not_found: false,
        }
    }

    /// Add a query parameter. Last write wins on duplicate keys.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.query.push((key, value)),
        }
        self
    }

    /// Add a body parameter. Insertion order is preserved on the wire;
    /// last write wins on duplicate keys (the original slot keeps its
    /// position).
    pub fn body_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.body.insert(key.into(), value);
        self
    }

    /// Set the JSON root key the body is wrapped under. The default is no
    /// wrapping — the body map serializes as-is.
    pub fn wrap(mut self, name: impl Into<String>) -> Self {
        self.wrapper = Some(name.into());
        self
    }

    /// Override the root key expected on the response payload
    /// (default `"response"`).
    pub fn expect_root(mut self, name: impl Into<String>) -> Self {
        self.response_root = name.into();
        self
    }

    /// Treat a 404 response as a normal typed response rather than a
    /// client error. A per-endpoint contract with the vendor: retrieval
    /// endpoints answer "not found" with a structured envelope.
    pub fn allow_not_found(mut self) -> Self {
        self.tolerate_not_found = true;
        self
    }

    /// Apply a timeout to connect/read/overall uniformly for this call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body_params(&self) -> &Map<String, Value> {
        &self.body
    }

    pub fn timeout_value(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn response_root(&self) -> &str {
        &self.response_root
    }

    pub fn tolerates_not_found(&self) -> bool {
        self.tolerate_not_found
    }

    /// Serialize the body parameters, wrapped under the root name when one
    /// is set.
    pub fn body_json(&self) -> Value {
        let body = Value::Object(self.body.clone());
        match &self.wrapper {
            Some(name) => {
                let mut wrapped = Map::new();
                wrapped.insert(name.clone(), body);
                Value::Object(wrapped)
            }
            None => body,
        }
    }
}

/// Join identifiers into the comma-separated path segment the vendor API
/// expects. An empty list yields `None` — nothing is appended after the
/// resource root's trailing slash.
pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    Some(
        ids.iter()
            .map(|id| id.as_ref())
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Build `<root>/<csv>` , or `<root>/` when the id list is empty.
pub(crate) fn ids_path<S: AsRef<str>>(root: &str, ids: &[S]) -> String {
    let mut path = format!("{root}/");
    if let Some(csv) = join_ids(ids) {
        path.push_str(&csv);
    }
    path
}
