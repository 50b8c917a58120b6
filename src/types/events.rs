//! Node result events, as delivered on the workflow event stream and in
//! webhook payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;
use crate::tagged_union;
use crate::types::function_call::FunctionCall;
use crate::types::workflow_error::WorkflowError;

/// Lifecycle state of a node's output within an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeResultEventState {
    Initiated,
    Streaming,
    Fulfilled,
    Rejected,
}

impl NodeResultEventState {
    pub const WIRE_VALUES: [&'static str; 4] =
        ["INITIATED", "STREAMING", "FULFILLED", "REJECTED"];
}

macro_rules! event_output_payload {
    (
        $(#[$meta:meta])*
        $name:ident, value: $value_ty:ty, validate_value: $check:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            /// Absent until the server has assigned the output an id.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub id: Option<String>,
            pub name: String,
            pub state: NodeResultEventState,
            pub node_id: String,
            /// The newly-streamed chunk. Only populated for string outputs in
            /// the `STREAMING` state.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub delta: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub value: Option<$value_ty>,
            #[serde(flatten)]
            pub extra: JsonObject,
        }

        impl Validate for $name {
            fn validate_value(value: &Value) -> Result<(), CodecError> {
                let obj = expect_object(value)?;
                validate::optional_string(obj, "id")?;
                validate::require_string(obj, "name")?;
                validate::require_one_of(obj, "state", &NodeResultEventState::WIRE_VALUES)?;
                validate::require_string(obj, "node_id")?;
                validate::optional_string(obj, "delta")?;
                let check: fn(&JsonObject, &str) -> Result<(), CodecError> = $check;
                check(obj, "value")
            }
        }
    };
}

event_output_payload!(NodeResultEventStringOutput, value: String,
    validate_value: validate::optional_string);
event_output_payload!(NodeResultEventFunctionCallOutput, value: FunctionCall,
    validate_value: validate::optional_nested::<FunctionCall>);
event_output_payload!(NodeResultEventErrorOutput, value: WorkflowError,
    validate_value: validate::optional_nested::<WorkflowError>);

tagged_union! {
    /// The output data attached to one node result event.
    pub enum NodeResultEventOutput, tag = "type" {
        "STRING" => String(NodeResultEventStringOutput),
        "FUNCTION_CALL" => FunctionCall(NodeResultEventFunctionCallOutput),
        "ERROR" => Error(NodeResultEventErrorOutput),
    }
}
