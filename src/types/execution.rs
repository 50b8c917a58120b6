//! Execution values: the variable snapshots attached to a workflow execution
//! record, one payload shape per variable type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;
use crate::tagged_union;
use crate::types::chat::ChatMessage;
use crate::types::function_call::FunctionCall;
use crate::types::search::SearchResult;
use crate::types::variable::VariableValue;
use crate::types::workflow_error::WorkflowError;

macro_rules! execution_payload {
    (
        $(#[$meta:meta])*
        $name:ident, value: $value_ty:ty, validate_value: $check:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            /// The variable's uniquely identifying internal id.
            pub id: String,
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

execution_payload!(ExecutionStringValue, value: String,
    validate_value: validate::optional_string);
execution_payload!(ExecutionNumberValue, value: f64,
    validate_value: validate::optional_number);
execution_payload!(
    /// A schemaless JSON variable; `value` is passed through untouched.
    ExecutionJsonValue, value: Value,
    validate_value: |_, _| Ok(()));
execution_payload!(ExecutionChatHistoryValue, value: Vec<ChatMessage>,
    validate_value: validate::optional_array);
execution_payload!(ExecutionSearchResultsValue, value: Vec<SearchResult>,
    validate_value: validate::optional_array);
execution_payload!(ExecutionErrorValue, value: WorkflowError,
    validate_value: validate::optional_nested::<WorkflowError>);
execution_payload!(ExecutionArrayValue, value: Vec<VariableValue>,
    validate_value: validate::optional_array);
execution_payload!(ExecutionFunctionCallValue, value: FunctionCall,
    validate_value: validate::optional_nested::<FunctionCall>);

tagged_union! {
    /// The value of one variable attached to a workflow execution.
    pub enum ExecutionValue, tag = "type" {
        "STRING" => String(ExecutionStringValue),
        "NUMBER" => Number(ExecutionNumberValue),
        "JSON" => Json(ExecutionJsonValue),
        "CHAT_HISTORY" => ChatHistory(ExecutionChatHistoryValue),
        "SEARCH_RESULTS" => SearchResults(ExecutionSearchResultsValue),
        "ERROR" => Error(ExecutionErrorValue),
        "ARRAY" => Array(ExecutionArrayValue),
        "FUNCTION_CALL" => FunctionCall(ExecutionFunctionCallValue),
    }
}

impl ExecutionValue {
    /// The variable's id, when the variant carries one (every known variant
    /// does; captured unknown payloads expose it only if the server sent it).
    pub fn id(&self) -> Option<&str> {
        match self {
            ExecutionValue::String(v) => Some(&v.id),
            ExecutionValue::Number(v) => Some(&v.id),
            ExecutionValue::Json(v) => Some(&v.id),
            ExecutionValue::ChatHistory(v) => Some(&v.id),
            ExecutionValue::SearchResults(v) => Some(&v.id),
            ExecutionValue::Error(v) => Some(&v.id),
            ExecutionValue::Array(v) => Some(&v.id),
            ExecutionValue::FunctionCall(v) => Some(&v.id),
            ExecutionValue::Unknown(raw) => raw.fields.get("id").and_then(Value::as_str),
        }
    }

    /// The variable's name, mirroring [`ExecutionValue::id`].
    pub fn name(&self) -> Option<&str> {
        match self {
            ExecutionValue::String(v) => Some(&v.name),
            ExecutionValue::Number(v) => Some(&v.name),
            ExecutionValue::Json(v) => Some(&v.name),
            ExecutionValue::ChatHistory(v) => Some(&v.name),
            ExecutionValue::SearchResults(v) => Some(&v.name),
            ExecutionValue::Error(v) => Some(&v.name),
            ExecutionValue::Array(v) => Some(&v.name),
            ExecutionValue::FunctionCall(v) => Some(&v.name),
            ExecutionValue::Unknown(raw) => raw.fields.get("name").and_then(Value::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Tagged, TaggedUnion};
    use serde_json::json;

    #[test]
    fn test_number_variant_decode() {
        let input = r#"{"id":"1","name":"x","type":"NUMBER","value":3.5}"#;
        let envelope = Tagged::<ExecutionValue>::from_json_str(input).unwrap();
        assert_eq!(envelope.tag(), "NUMBER");
        match envelope.value() {
            ExecutionValue::Number(payload) => {
                assert_eq!(payload.value, Some(3.5));
                assert!(payload.extra.is_empty());
            }
            other => panic!("expected NUMBER, got {other:?}"),
        }
        let encoded: Value =
            serde_json::from_str(&envelope.to_json_string().unwrap()).unwrap();
        assert_eq!(
            encoded,
            json!({"id": "1", "name": "x", "type": "NUMBER", "value": 3.5})
        );
    }

    #[test]
    fn test_accessors_cover_unknown_payloads() {
        let decoded: ExecutionValue = serde_json::from_value(
            json!({"id": "9", "name": "clip", "type": "VIDEO", "value": "v.mp4"}),
        )
        .unwrap();
        assert_eq!(decoded.id(), Some("9"));
        assert_eq!(decoded.name(), Some("clip"));
        assert_eq!(decoded.tag(), "VIDEO");
    }

    #[test]
    fn test_unmapped_members_survive_round_trip() {
        let input = json!({
            "id": "1",
            "name": "x",
            "type": "STRING",
            "value": "hello",
            "shiny_new_field": {"nested": true}
        });
        let decoded: ExecutionValue = serde_json::from_value(input.clone()).unwrap();
        match &decoded {
            ExecutionValue::String(payload) => {
                assert_eq!(payload.extra["shiny_new_field"], json!({"nested": true}));
            }
            other => panic!("expected STRING, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&decoded).unwrap(), input);
    }
}
