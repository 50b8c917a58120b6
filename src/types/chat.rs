//! Chat history primitives.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;

/// Speaker of a [`ChatMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Function,
}

impl ChatRole {
    /// All wire values, for structural validation.
    pub const WIRE_VALUES: [&'static str; 4] = ["SYSTEM", "USER", "ASSISTANT", "FUNCTION"];
}

/// A single message in a chat history variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Identifies the upstream system the message originated from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl ChatMessage {
    /// Convenience constructor for a plain-text message with an empty
    /// unknown-field bag.
    pub fn text(role: ChatRole, text: impl Into<String>) -> Self {
        ChatMessage {
            role,
            text: Some(text.into()),
            source: None,
            extra: JsonObject::new(),
        }
    }
}

impl Validate for ChatMessage {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::require_one_of(obj, "role", &ChatRole::WIRE_VALUES)?;
        validate::optional_string(obj, "text")?;
        validate::optional_string(obj, "source")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_wire_casing() {
        let msg = ChatMessage::text(ChatRole::Assistant, "hi");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "ASSISTANT");
    }

    #[test]
    fn test_validate_rejects_unknown_role() {
        let value = json!({"role": "NARRATOR", "text": "hi"});
        assert!(ChatMessage::validate_value(&value).is_err());
    }
}
