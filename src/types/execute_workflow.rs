//! Request and response bodies for the execute-workflow endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;
use crate::tagged_union;
use crate::types::execution::ExecutionValue;
use crate::types::workflow_error::WorkflowError;
use crate::types::workflow_input::WorkflowInput;
use crate::types::workflow_output::WorkflowOutput;

/// Body of `POST /v1/execute-workflow`.
///
/// Exactly one of `workflow_deployment_id` / `workflow_deployment_name` must
/// be set; the server rejects requests carrying both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExecuteWorkflowRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_deployment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_deployment_name: Option<String>,
    /// Release tag to pin; defaults to the latest release server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_tag: Option<String>,
    pub inputs: Vec<WorkflowInput>,
    /// Caller-supplied correlation id, echoed back on the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResultFulfilled {
    pub outputs: Vec<WorkflowOutput>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for WorkflowResultFulfilled {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::require_array(obj, "outputs")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResultRejected {
    pub error: WorkflowError,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for WorkflowResultRejected {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::require_nested::<WorkflowError>(obj, "error")
    }
}

tagged_union! {
    /// Terminal outcome of a workflow execution. Discriminated by `state`
    /// rather than `type`; this union predates the newer tag convention and
    /// the server still serves it this way.
    pub enum WorkflowResult, tag = "state" {
        "FULFILLED" => Fulfilled(WorkflowResultFulfilled),
        "REJECTED" => Rejected(WorkflowResultRejected),
    }
}

/// Response body of `POST /v1/execute-workflow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteWorkflowResponse {
    pub execution_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub data: WorkflowResult,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for ExecuteWorkflowResponse {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::require_string(obj, "execution_id")?;
        validate::optional_string(obj, "external_id")?;
        validate::require_nested::<WorkflowResult>(obj, "data")
    }
}

/// Response body of `GET /v1/executions/{execution_id}`: the recorded state
/// of a past execution, including every variable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowExecutionDetail {
    pub execution_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub outputs: Vec<ExecutionValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<WorkflowError>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for WorkflowExecutionDetail {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::require_string(obj, "execution_id")?;
        validate::optional_string(obj, "external_id")?;
        validate::require_array(obj, "outputs")?;
        validate::optional_nested::<WorkflowError>(obj, "error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::workflow_error::WorkflowErrorCode;
    use serde_json::json;

    #[test]
    fn test_result_discriminated_by_state_field() {
        let input = json!({
            "execution_id": "exec-1",
            "data": {
                "state": "REJECTED",
                "error": {"message": "provider timed out", "code": "PROVIDER_ERROR"}
            }
        });
        let response: ExecuteWorkflowResponse =
            serde_json::from_value(input.clone()).unwrap();
        match &response.data {
            WorkflowResult::Rejected(rejected) => {
                assert_eq!(rejected.error.code, WorkflowErrorCode::ProviderError);
            }
            other => panic!("expected REJECTED, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&response).unwrap(), input);
    }

    #[test]
    fn test_request_omits_unset_optionals() {
        let request = ExecuteWorkflowRequest {
            workflow_deployment_name: Some("summarizer".to_owned()),
            inputs: vec![WorkflowInput::string("text", "hello")],
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "workflow_deployment_name": "summarizer",
                "inputs": [{"type": "STRING", "name": "text", "value": "hello"}]
            })
        );
    }
}
