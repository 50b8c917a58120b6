//! The error value carried by `ERROR`-tagged variants.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;

/// Machine-readable category of a workflow-side failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowErrorCode {
    InvalidRequest,
    ProviderError,
    InternalServerError,
    UserDefinedError,
}

impl WorkflowErrorCode {
    pub const WIRE_VALUES: [&'static str; 4] = [
        "INVALID_REQUEST",
        "PROVIDER_ERROR",
        "INTERNAL_SERVER_ERROR",
        "USER_DEFINED_ERROR",
    ];
}

/// An error raised during workflow execution, embedded in a value rather than
/// carried as an HTTP failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowError {
    pub message: String,
    pub code: WorkflowErrorCode,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for WorkflowError {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::require_string(obj, "message")?;
        validate::require_one_of(obj, "code", &WorkflowErrorCode::WIRE_VALUES)
    }
}
