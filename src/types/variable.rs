//! Bare variable values: the union carried inside `ARRAY`-typed execution and
//! workflow outputs. Unlike the named execution values, these payloads have no
//! `id`/`name` members, just the value itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;
use crate::tagged_union;
use crate::types::workflow_error::WorkflowError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringVariableValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for StringVariableValue {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::optional_string(obj, "value")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberVariableValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for NumberVariableValue {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::optional_number(obj, "value")
    }
}

/// A schemaless JSON value; the payload's `value` member is passed through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonVariableValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for JsonVariableValue {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        expect_object(value).map(|_| ())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorVariableValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<WorkflowError>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for ErrorVariableValue {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::optional_nested::<WorkflowError>(obj, "value")
    }
}

tagged_union! {
    /// A single element of an array-typed variable.
    pub enum VariableValue, tag = "type" {
        "STRING" => String(StringVariableValue),
        "NUMBER" => Number(NumberVariableValue),
        "JSON" => Json(JsonVariableValue),
        "ERROR" => Error(ErrorVariableValue),
    }
}

impl VariableValue {
    /// Shorthand for a string element with an empty unknown-field bag.
    pub fn string(value: impl Into<String>) -> Self {
        VariableValue::String(StringVariableValue {
            value: Some(value.into()),
            extra: JsonObject::new(),
        })
    }

    /// Shorthand for a numeric element with an empty unknown-field bag.
    pub fn number(value: f64) -> Self {
        VariableValue::Number(NumberVariableValue {
            value: Some(value),
            extra: JsonObject::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_element_round_trip() {
        let decoded: VariableValue =
            serde_json::from_value(json!({"type": "NUMBER", "value": 2.5})).unwrap();
        assert_eq!(decoded, VariableValue::number(2.5));
        let encoded = serde_json::to_value(&decoded).unwrap();
        assert_eq!(encoded, json!({"type": "NUMBER", "value": 2.5}));
    }

    #[test]
    fn test_unknown_tag_is_captured() {
        let decoded: VariableValue =
            serde_json::from_value(json!({"type": "AUDIO", "value": "a.wav"})).unwrap();
        match &decoded {
            VariableValue::Unknown(raw) => {
                assert_eq!(raw.tag, "AUDIO");
                assert_eq!(raw.fields["value"], "a.wav");
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
        // The original tag comes back on encode.
        let encoded = serde_json::to_value(&decoded).unwrap();
        assert_eq!(encoded, json!({"type": "AUDIO", "value": "a.wav"}));
    }
}
