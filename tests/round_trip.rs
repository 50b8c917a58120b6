//! Wire-fidelity tests: decode/encode round trips across the union families,
//! including the fallback paths for discriminator tags this build has never
//! seen.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tapestry_client::codec::validate::{self, expect_object};
use tapestry_client::codec::{JsonObject, Tagged, TaggedUnion, Validate};
use tapestry_client::error::CodecError;
use tapestry_client::tagged_union;
use tapestry_client::types::{
    ChatMessage, ChatRole, ExecutionValue, NodeResultEventOutput, VariableValue, WorkflowOutput,
};

#[test]
fn test_known_variants_round_trip() {
    let bodies = [
        json!({"id": "1", "name": "a", "type": "STRING", "value": "hello"}),
        json!({"id": "2", "name": "b", "type": "NUMBER", "value": 42.0}),
        json!({"id": "3", "name": "c", "type": "JSON", "value": {"k": [1, 2]}}),
        json!({"id": "4", "name": "d", "type": "ERROR",
               "value": {"message": "boom", "code": "USER_DEFINED_ERROR"}}),
        json!({"id": "5", "name": "e", "type": "FUNCTION_CALL",
               "value": {"name": "lookup", "arguments": {"q": "rust"}}}),
        json!({"id": "6", "name": "f", "type": "ARRAY",
               "value": [{"type": "NUMBER", "value": 1.5}]}),
    ];
    for body in bodies {
        let decoded: ExecutionValue = serde_json::from_value(body.clone()).unwrap();
        assert!(ExecutionValue::validate_value(&body).is_ok());
        assert_eq!(serde_json::to_value(&decoded).unwrap(), body, "body: {body}");
    }
}

#[test]
fn test_concrete_number_scenario() {
    let input = r#"{"id":"1","name":"x","type":"NUMBER","value":3.5}"#;
    let envelope = Tagged::<ExecutionValue>::from_json_str(input).unwrap();
    assert_eq!(envelope.tag(), "NUMBER");
    let payload = match envelope.value() {
        ExecutionValue::Number(payload) => payload,
        other => panic!("expected NUMBER, got {other:?}"),
    };
    assert_eq!(payload.value, Some(3.5));

    let reencoded: Value = serde_json::from_str(&envelope.to_json_string().unwrap()).unwrap();
    let original: Value = serde_json::from_str(input).unwrap();
    assert_eq!(reencoded, original);
}

#[test]
fn test_unknown_tag_is_captured_and_preserved() {
    let input = json!({"id": "1", "name": "x", "type": "UNKNOWN_FUTURE_TAG", "value": 3.5});
    let envelope = Tagged::<ExecutionValue>::from_json_value(input.clone()).unwrap();
    assert_eq!(envelope.tag(), "UNKNOWN_FUTURE_TAG");
    match envelope.value() {
        ExecutionValue::Unknown(raw) => {
            assert_eq!(raw.tag, "UNKNOWN_FUTURE_TAG");
            assert_eq!(raw.fields["value"], 3.5);
            assert!(!raw.fields.contains_key("type"));
        }
        other => panic!("expected Unknown, got {other:?}"),
    }
    // The unrecognized tag must appear in the re-encoded output.
    assert_eq!(envelope.to_json_value().unwrap(), input);
}

#[test]
fn test_nested_sequence_round_trip_preserves_order() {
    let input = json!({
        "id": "1",
        "name": "history",
        "type": "CHAT_HISTORY",
        "value": [
            {"role": "SYSTEM", "text": "be brief"},
            {"role": "USER", "text": "hi"},
            {"role": "ASSISTANT", "text": "hello"}
        ]
    });
    let decoded: ExecutionValue = serde_json::from_value(input.clone()).unwrap();
    let messages = match &decoded {
        ExecutionValue::ChatHistory(payload) => payload.value.as_ref().unwrap(),
        other => panic!("expected CHAT_HISTORY, got {other:?}"),
    };
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0], ChatMessage::text(ChatRole::System, "be brief"));
    assert_eq!(messages[2].text.as_deref(), Some("hello"));
    assert_eq!(serde_json::to_value(&decoded).unwrap(), input);
}

#[test]
fn test_optional_field_omission_is_stable() {
    let input = json!({"id": "1", "name": "x", "type": "STRING"});
    let decoded: ExecutionValue = serde_json::from_value(input.clone()).unwrap();
    assert!(ExecutionValue::validate_value(&input).is_ok());
    match &decoded {
        ExecutionValue::String(payload) => assert!(payload.value.is_none()),
        other => panic!("expected STRING, got {other:?}"),
    }
    // Absent optionals stay absent on encode, not null.
    assert_eq!(serde_json::to_value(&decoded).unwrap(), input);
}

#[test]
fn test_unknown_fields_bag_round_trips_inside_arrays() {
    let input = json!({
        "id": "1",
        "name": "grid",
        "type": "ARRAY",
        "value": [
            {"type": "STRING", "value": "a", "annotation": "future-member"},
            {"type": "FUTURE_ITEM", "payload": [1, 2, 3]}
        ]
    });
    let decoded: ExecutionValue = serde_json::from_value(input.clone()).unwrap();
    match &decoded {
        ExecutionValue::Array(payload) => {
            let items = payload.value.as_ref().unwrap();
            match &items[0] {
                VariableValue::String(s) => {
                    assert_eq!(s.extra["annotation"], "future-member");
                }
                other => panic!("expected STRING element, got {other:?}"),
            }
            assert!(matches!(items[1], VariableValue::Unknown(_)));
        }
        other => panic!("expected ARRAY, got {other:?}"),
    }
    assert_eq!(serde_json::to_value(&decoded).unwrap(), input);
}

#[test]
fn test_missing_discriminator_is_an_error() {
    let err = Tagged::<WorkflowOutput>::from_json_value(json!({"id": "1", "name": "x"}))
        .unwrap_err();
    assert!(matches!(
        err,
        CodecError::MissingDiscriminator { field: "type" }
    ));
}

#[test]
fn test_event_output_round_trip() {
    let input = json!({
        "type": "FUNCTION_CALL",
        "name": "tool_use",
        "state": "FULFILLED",
        "node_id": "node-3",
        "value": {"name": "get_weather", "arguments": {"city": "Lisbon"}, "id": "call-1"}
    });
    let decoded: NodeResultEventOutput = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(serde_json::to_value(&decoded).unwrap(), input);
}

// ============================================================================
// Legacy coerce-first fallback policy
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LegacyMetricOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(flatten)]
    extra: JsonObject,
}

impl Validate for LegacyMetricOutput {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::optional_number(obj, "value")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LegacyTextOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(flatten)]
    extra: JsonObject,
}

impl Validate for LegacyTextOutput {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::optional_string(obj, "value")
    }
}

tagged_union! {
    /// A union pinned to the legacy policy: unrecognized tags decode with the
    /// first registered variant's codec.
    enum LegacyOutput, tag = "type", fallback = coerce_first {
        "NUMBER" => Number(LegacyMetricOutput),
        "STRING" => Text(LegacyTextOutput),
    }
}

#[test]
fn test_coerce_first_decodes_unknown_as_first_variant() {
    let input = json!({"type": "UNKNOWN_FUTURE_TAG", "value": 3.5});
    let envelope = Tagged::<LegacyOutput>::from_json_value(input.clone()).unwrap();

    // The payload equals the first variant's decode of the same body...
    let expected = LegacyOutput::Number(LegacyMetricOutput {
        value: Some(3.5),
        extra: JsonObject::new(),
    });
    assert_eq!(envelope.value(), &expected);

    // ...while the envelope still remembers and re-emits the original tag.
    assert_eq!(envelope.tag(), "UNKNOWN_FUTURE_TAG");
    assert_eq!(envelope.to_json_value().unwrap(), input);
}

#[test]
fn test_coerce_first_known_tag_resolves_normally() {
    let envelope =
        Tagged::<LegacyOutput>::from_json_value(json!({"type": "STRING", "value": "ok"}))
            .unwrap();
    assert_eq!(envelope.tag(), "STRING");
    assert_eq!(envelope.value().tag(), "STRING");
    assert!(matches!(envelope.value(), LegacyOutput::Text(_)));
}
