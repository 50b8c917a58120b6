//! Synchronous API client.
//!
//! Same surface as [`Client`](crate::transport::Client), built on
//! `reqwest::blocking`. Do not use from inside an async runtime; pick the
//! async client there instead.

use reqwest::Method;
use serde_json::Value;

use crate::codec;
use crate::error::{ClientError, CodecError};
use crate::transport::{
    ClientOptions, ListDocumentIndexesRequest, PATH_DOCUMENT_INDEXES, PATH_EXECUTE_WORKFLOW,
    PATH_EXECUTIONS,
};
use crate::types::{
    DocumentIndexRead, ExecuteWorkflowRequest, ExecuteWorkflowResponse, Paginated,
    WorkflowExecutionDetail,
};

/// Synchronous client over [`reqwest::blocking::Client`].
#[derive(Debug, Clone)]
pub struct BlockingClient {
    http: reqwest::blocking::Client,
    options: ClientOptions,
}

impl BlockingClient {
    pub fn new(options: ClientOptions) -> Result<Self, ClientError> {
        let mut builder =
            reqwest::blocking::Client::builder().default_headers(options.default_headers()?);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(BlockingClient {
            http: builder.build()?,
            options,
        })
    }

    /// Convenience constructor against the production environment.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientOptions::new(api_key))
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Low-level escape hatch; see
    /// [`Client::send`](crate::transport::Client::send).
    pub fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<String, ClientError> {
        let url = self.options.environment.url_for(path);
        log::debug!("{method} {url}");
        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            log::warn!("API error {status} from {url}");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }

    /// Trigger a workflow deployment and wait for its terminal result.
    pub fn execute_workflow(
        &self,
        request: &ExecuteWorkflowRequest,
    ) -> Result<ExecuteWorkflowResponse, ClientError> {
        let body = serde_json::to_value(request).map_err(CodecError::from)?;
        let text = self.send(Method::POST, PATH_EXECUTE_WORKFLOW, &[], Some(&body))?;
        Ok(codec::from_json(&text)?)
    }

    /// Fetch the recorded detail of a past execution.
    pub fn get_workflow_execution(
        &self,
        execution_id: &str,
    ) -> Result<WorkflowExecutionDetail, ClientError> {
        let path = format!("{PATH_EXECUTIONS}/{execution_id}");
        let text = self.send(Method::GET, &path, &[], None)?;
        Ok(codec::from_json(&text)?)
    }

    /// List document indexes, one page at a time.
    pub fn list_document_indexes(
        &self,
        request: &ListDocumentIndexesRequest,
    ) -> Result<Paginated<DocumentIndexRead>, ClientError> {
        let text = self.send(Method::GET, PATH_DOCUMENT_INDEXES, &request.query(), None)?;
        Ok(codec::from_json(&text)?)
    }
}
