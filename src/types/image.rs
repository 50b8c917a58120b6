//! Image values referenced by workflow outputs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;

/// A reference to an image by source URL, with free-form metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for Image {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::require_string(obj, "src")?;
        match obj.get("metadata") {
            Some(Value::Object(_)) | Some(Value::Null) | None => Ok(()),
            Some(_) => Err(CodecError::TypeMismatch {
                field: "metadata".to_owned(),
                expected: "object",
            }),
        }
    }
}
