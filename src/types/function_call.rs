//! Function-call values emitted by tool-using prompt nodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;

/// A model-issued function call: a name plus a free-form argument object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for FunctionCall {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::require_string(obj, "name")?;
        // Arguments are schemaless by contract; presence is all we require.
        if !obj.contains_key("arguments") {
            return Err(CodecError::MissingField {
                field: "arguments".to_owned(),
            });
        }
        validate::optional_string(obj, "id")
    }
}
