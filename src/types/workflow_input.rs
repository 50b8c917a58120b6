//! Request-side workflow inputs. These are caller-built, so `value` is
//! required and there is no server-assigned `id`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;
use crate::tagged_union;
use crate::types::chat::ChatMessage;

macro_rules! workflow_input_payload {
    (
        $(#[$meta:meta])*
        $name:ident, value: $value_ty:ty, validate_value: $check:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            /// The variable's name, as defined in the workflow.
            pub name: String,
            pub value: $value_ty,
            #[serde(flatten)]
            pub extra: JsonObject,
        }

        impl Validate for $name {
            fn validate_value(value: &Value) -> Result<(), CodecError> {
                let obj = expect_object(value)?;
                validate::require_string(obj, "name")?;
                let check: fn(&JsonObject, &str) -> Result<(), CodecError> = $check;
                check(obj, "value")
            }
        }
    };
}

workflow_input_payload!(WorkflowStringInput, value: String,
    validate_value: validate::require_string);
workflow_input_payload!(WorkflowNumberInput, value: f64,
    validate_value: validate::require_number);
workflow_input_payload!(WorkflowJsonInput, value: Value,
    validate_value: |obj, field| {
        if obj.contains_key(field) {
            Ok(())
        } else {
            Err(CodecError::MissingField { field: field.to_owned() })
        }
    });
workflow_input_payload!(WorkflowChatHistoryInput, value: Vec<ChatMessage>,
    validate_value: validate::require_array);

tagged_union! {
    /// One input variable supplied when triggering a workflow.
    pub enum WorkflowInput, tag = "type" {
        "STRING" => String(WorkflowStringInput),
        "NUMBER" => Number(WorkflowNumberInput),
        "JSON" => Json(WorkflowJsonInput),
        "CHAT_HISTORY" => ChatHistory(WorkflowChatHistoryInput),
    }
}

impl WorkflowInput {
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        WorkflowInput::String(WorkflowStringInput {
            name: name.into(),
            value: value.into(),
            extra: JsonObject::new(),
        })
    }

    pub fn number(name: impl Into<String>, value: f64) -> Self {
        WorkflowInput::Number(WorkflowNumberInput {
            name: name.into(),
            value,
            extra: JsonObject::new(),
        })
    }

    pub fn json(name: impl Into<String>, value: Value) -> Self {
        WorkflowInput::Json(WorkflowJsonInput {
            name: name.into(),
            value,
            extra: JsonObject::new(),
        })
    }

    pub fn chat_history(name: impl Into<String>, value: Vec<ChatMessage>) -> Self {
        WorkflowInput::ChatHistory(WorkflowChatHistoryInput {
            name: name.into(),
            value,
            extra: JsonObject::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constructors_serialize_flat() {
        let input = WorkflowInput::string("query", "hello");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"type": "STRING", "name": "query", "value": "hello"})
        );
    }

    #[test]
    fn test_missing_required_value_fails_validation() {
        let err = WorkflowInput::validate_value(&json!({"type": "STRING", "name": "q"}))
            .unwrap_err();
        assert!(matches!(err, CodecError::MissingField { ref field } if field == "value"));
    }
}
