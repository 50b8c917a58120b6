//! Asynchronous API client.

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

/// Asynchronous client over a pooled [`reqwest::Client`].
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    options: ClientOptions,
}

impl Client {
    pub fn new(options: ClientOptions) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().default_headers(options.default_headers()?);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Client {
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

    /// Low-level escape hatch: send a request to an API path and return the
    /// raw response body. Non-success statuses become [`ClientError::Api`];
    /// the body is returned as text and never inspected here.
    pub async fn send(
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
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
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
    pub async fn execute_workflow(
        &self,
        request: &ExecuteWorkflowRequest,
    ) -> Result<ExecuteWorkflowResponse, ClientError> {
        let body = serde_json::to_value(request).map_err(CodecError::from)?;
        let text = self
            .send(Method::POST, PATH_EXECUTE_WORKFLOW, &[], Some(&body))
            .await?;
        Ok(codec::from_json(&text)?)
    }

    /// Fetch the recorded detail of a past execution.
    pub async fn get_workflow_execution(
        &self,
        execution_id: &str,
    ) -> Result<WorkflowExecutionDetail, ClientError> {
        let path = format!("{PATH_EXECUTIONS}/{execution_id}");
        let text = self.send(Method::GET, &path, &[], None).await?;
        Ok(codec::from_json(&text)?)
    }

    /// List document indexes, one page at a time.
    pub async fn list_document_indexes(
        &self,
        request: &ListDocumentIndexesRequest,
    ) -> Result<Paginated<DocumentIndexRead>, ClientError> {
        let text = self
            .send(Method::GET, PATH_DOCUMENT_INDEXES, &request.query(), None)
            .await?;
        Ok(codec::from_json(&text)?)
    }
}
