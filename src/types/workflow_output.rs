//! Final outputs of a workflow execution, one payload shape per output type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;
use crate::tagged_union;
use crate::types::chat::ChatMessage;
use crate::types::function_call::FunctionCall;
use crate::types::image::Image;
use crate::types::search::SearchResult;
use crate::types::variable::VariableValue;
use crate::types::workflow_error::WorkflowError;

macro_rules! workflow_output_payload {
    (
        $(#[$meta:meta])*
        $name:ident, value: $value_ty:ty, validate_value: $check:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub id: String,
            /// The output's name, as defined in the workflow.
            pub name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub value: Option<$value_ty>,
            #[serde(flatten)]
            pub extra: JsonObject,
        }

        impl Validate for $name {
            fn validate_value(value: &Value) -> Result<(), CodecError> {
                let obj = expect_object(value)?;
                validate::require_string(obj, "id")?;
                validate::require_string(obj, "name")?;
                let check: fn(&JsonObject, &str) -> Result<(), CodecError> = $check;
                check(obj, "value")
            }
        }
    };
}

workflow_output_payload!(WorkflowOutputString, value: String,
    validate_value: validate::optional_string);
workflow_output_payload!(WorkflowOutputNumber, value: f64,
    validate_value: validate::optional_number);
workflow_output_payload!(WorkflowOutputJson, value: Value,
    validate_value: |_, _| Ok(()));
workflow_output_payload!(WorkflowOutputImage, value: Image,
    validate_value: validate::optional_nested::<Image>);
workflow_output_payload!(WorkflowOutputChatHistory, value: Vec<ChatMessage>,
    validate_value: validate::optional_array);
workflow_output_payload!(WorkflowOutputSearchResults, value: Vec<SearchResult>,
    validate_value: validate::optional_array);
workflow_output_payload!(WorkflowOutputArray, value: Vec<VariableValue>,
    validate_value: validate::optional_array);
workflow_output_payload!(WorkflowOutputError, value: WorkflowError,
    validate_value: validate::optional_nested::<WorkflowError>);
workflow_output_payload!(WorkflowOutputFunctionCall, value: FunctionCall,
    validate_value: validate::optional_nested::<FunctionCall>);

tagged_union! {
    /// One named output produced by a workflow execution.
    pub enum WorkflowOutput, tag = "type" {
        "STRING" => String(WorkflowOutputString),
        "NUMBER" => Number(WorkflowOutputNumber),
        "JSON" => Json(WorkflowOutputJson),
        "IMAGE" => Image(WorkflowOutputImage),
        "CHAT_HISTORY" => ChatHistory(WorkflowOutputChatHistory),
        "SEARCH_RESULTS" => SearchResults(WorkflowOutputSearchResults),
        "ARRAY" => Array(WorkflowOutputArray),
        "ERROR" => Error(WorkflowOutputError),
        "FUNCTION_CALL" => FunctionCall(WorkflowOutputFunctionCall),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_output_round_trip() {
        let input = json!({
            "id": "out-1",
            "name": "thumbnail",
            "type": "IMAGE",
            "value": {"src": "https://cdn.example.com/a.png"}
        });
        let decoded: WorkflowOutput = serde_json::from_value(input.clone()).unwrap();
        match &decoded {
            WorkflowOutput::Image(payload) => {
                let image = payload.value.as_ref().unwrap();
                assert_eq!(image.src, "https://cdn.example.com/a.png");
                assert!(image.metadata.is_none());
            }
            other => panic!("expected IMAGE, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&decoded).unwrap(), input);
    }

    #[test]
    fn test_array_output_holds_variable_values() {
        let input = json!({
            "id": "out-2",
            "name": "scores",
            "type": "ARRAY",
            "value": [
                {"type": "NUMBER", "value": 1.0},
                {"type": "STRING", "value": "low"}
            ]
        });
        let decoded: WorkflowOutput = serde_json::from_value(input.clone()).unwrap();
        match &decoded {
            WorkflowOutput::Array(payload) => {
                let items = payload.value.as_ref().unwrap();
                assert_eq!(items.len(), 2);
                assert_eq!(items[0], VariableValue::number(1.0));
            }
            other => panic!("expected ARRAY, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&decoded).unwrap(), input);
    }
}
