//! Thin HTTP transport: header wiring, URL construction, and one typed
//! wrapper per endpoint, in synchronous and asynchronous flavors.
//!
//! The transport deliberately stays small. It authenticates, sends, and turns
//! non-success statuses into [`ClientError::Api`]; retries, backoff, and
//! status-code interpretation beyond success/failure are the caller's
//! concern.

pub mod blocking;
pub mod client;

pub use blocking::BlockingClient;
pub use client::Client;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::environment::Environment;
use crate::error::ClientError;

pub(crate) const HEADER_API_KEY: &str = "X-API-KEY";
pub(crate) const HEADER_SDK_NAME: &str = "X-SDK-Name";
pub(crate) const HEADER_SDK_VERSION: &str = "X-SDK-Version";
pub(crate) const HEADER_SDK_LANGUAGE: &str = "X-SDK-Language";

pub(crate) const PATH_EXECUTE_WORKFLOW: &str = "/v1/execute-workflow";
pub(crate) const PATH_EXECUTIONS: &str = "/v1/executions";
pub(crate) const PATH_DOCUMENT_INDEXES: &str = "/v1/document-indexes";

/// Configuration shared by [`Client`] and [`BlockingClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_key: String,
    pub environment: Environment,
    /// Whole-request timeout. `None` uses reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientOptions {
            api_key: api_key.into(),
            environment: Environment::production(),
            timeout: None,
        }
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Default headers sent on every request: the API key plus the
    /// SDK-identifying triple.
    pub(crate) fn default_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| ClientError::Configuration("API key is not a valid header value".to_owned()))?;
        api_key.set_sensitive(true);
        headers.insert(HEADER_API_KEY, api_key);
        headers.insert(HEADER_SDK_NAME, HeaderValue::from_static(crate::NAME));
        headers.insert(HEADER_SDK_VERSION, HeaderValue::from_static(crate::VERSION));
        headers.insert(HEADER_SDK_LANGUAGE, HeaderValue::from_static("Rust"));
        Ok(headers)
    }
}

/// Query-string parameters accepted by the document-index list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListDocumentIndexesRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Field to order by, e.g. `"created"` or `"-created"`.
    pub ordering: Option<String>,
}

impl ListDocumentIndexesRequest {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(ordering) = &self.ordering {
            query.push(("ordering", ordering.clone()));
        }
        query
    }
}
