//! Boundary-validation tests: structural checks of raw response JSON before
//! decoding, with errors naming the offending field path.

use serde_json::json;
use tapestry_client::codec::Validate;
use tapestry_client::error::CodecError;
use tapestry_client::types::{
    ExecuteWorkflowResponse, ExecutionValue, Paginated, DocumentIndexRead, SearchResult,
    WorkflowInput,
};

#[test]
fn test_wrong_typed_value_field_is_named() {
    // Declared numeric, holds a string.
    let body = json!({"id": "1", "name": "x", "type": "NUMBER", "value": "not-a-number"});
    let err = ExecutionValue::validate_value(&body).unwrap_err();
    match err {
        CodecError::TypeMismatch { field, expected } => {
            assert_eq!(field, "value");
            assert_eq!(expected, "number");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_absent_optional_field_passes() {
    let body = json!({"id": "1", "name": "x", "type": "NUMBER"});
    assert!(ExecutionValue::validate_value(&body).is_ok());
}

#[test]
fn test_unknown_tag_passes_under_capture_policy() {
    let body = json!({"type": "HOLOGRAM", "anything": [1, 2, 3]});
    assert!(ExecutionValue::validate_value(&body).is_ok());
}

#[test]
fn test_nested_error_path_is_dotted() {
    let body = json!({
        "execution_id": "exec-1",
        "data": {"state": "REJECTED", "error": {"message": "boom", "code": 500}}
    });
    let err = ExecuteWorkflowResponse::validate_value(&body).unwrap_err();
    match err {
        CodecError::TypeMismatch { field, .. } => assert_eq!(field, "data.error.code"),
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_validate_json_str_parses_then_checks() {
    let text = r#"{"type":"STRING","name":"q","value":"hello"}"#;
    assert!(WorkflowInput::validate_json_str(text).is_ok());
    assert!(WorkflowInput::validate_json_str("{not json").is_err());
}

#[test]
fn test_search_result_requires_score() {
    let body = json!({
        "text": "chunk",
        "keywords": ["a"],
        "document": {"label": "doc"}
    });
    let err = SearchResult::validate_value(&body).unwrap_err();
    assert!(matches!(err, CodecError::MissingField { ref field } if field == "score"));
}

#[test]
fn test_page_envelope_validation() {
    let ok = json!({"count": 2, "next": null, "previous": null, "results": []});
    assert!(Paginated::<DocumentIndexRead>::validate_value(&ok).is_ok());

    let bad = json!({"count": 2, "results": "nope"});
    let err = Paginated::<DocumentIndexRead>::validate_value(&bad).unwrap_err();
    assert!(matches!(
        err,
        CodecError::TypeMismatch { ref field, expected: "array" } if field == "results"
    ));
}

#[test]
fn test_non_object_body_is_rejected() {
    let err = ExecutionValue::validate_value(&json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, CodecError::ExpectedObject { found: "array" }));
}
