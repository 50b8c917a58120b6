//! Structural validation of externally-sourced JSON.
//!
//! Decoding through serde already enforces field types in-process, so these
//! checks exist for one purpose: inspecting a raw response body *before*
//! trusting it, and failing with an error that names the offending field path
//! rather than a serde parse position. Absence of an optional field is never a
//! failure; a present-but-wrong-typed field always is. Sequence fields get a
//! shallow "is an array" check; nested objects are checked recursively.

use serde_json::Value;

use crate::codec::JsonObject;
use crate::error::CodecError;

/// Structural check of a raw JSON value against a declared shape.
pub trait Validate {
    fn validate_value(value: &Value) -> Result<(), CodecError>;

    /// Validate raw JSON text without decoding it.
    fn validate_json_str(text: &str) -> Result<(), CodecError> {
        Self::validate_value(&serde_json::from_str(text)?)
    }
}

/// Human-readable name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrow a value as an object, or fail.
pub fn expect_object(value: &Value) -> Result<&JsonObject, CodecError> {
    value.as_object().ok_or(CodecError::ExpectedObject {
        found: json_type_name(value),
    })
}

fn present<'a>(obj: &'a JsonObject, field: &str) -> Option<&'a Value> {
    // An explicit null is treated the same as an absent member.
    match obj.get(field) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

fn mismatch(field: &str, expected: &'static str) -> CodecError {
    CodecError::TypeMismatch {
        field: field.to_owned(),
        expected,
    }
}

fn missing(field: &str) -> CodecError {
    CodecError::MissingField {
        field: field.to_owned(),
    }
}

pub fn require_string(obj: &JsonObject, field: &str) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(mismatch(field, "string")),
        None => Err(missing(field)),
    }
}

pub fn optional_string(obj: &JsonObject, field: &str) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(Value::String(_)) | None => Ok(()),
        Some(_) => Err(mismatch(field, "string")),
    }
}

pub fn require_number(obj: &JsonObject, field: &str) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(Value::Number(_)) => Ok(()),
        Some(_) => Err(mismatch(field, "number")),
        None => Err(missing(field)),
    }
}

pub fn optional_number(obj: &JsonObject, field: &str) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(Value::Number(_)) | None => Ok(()),
        Some(_) => Err(mismatch(field, "number")),
    }
}

pub fn optional_unsigned(obj: &JsonObject, field: &str) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(value) if value.is_u64() => Ok(()),
        None => Ok(()),
        Some(_) => Err(mismatch(field, "unsigned integer")),
    }
}

/// Shallow sequence check: the member must be an array, elements are not
/// inspected.
pub fn require_array(obj: &JsonObject, field: &str) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(mismatch(field, "array")),
        None => Err(missing(field)),
    }
}

pub fn optional_array(obj: &JsonObject, field: &str) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(Value::Array(_)) | None => Ok(()),
        Some(_) => Err(mismatch(field, "array")),
    }
}

/// Recursive check of a required nested object through its own validator.
pub fn require_nested<T: Validate>(obj: &JsonObject, field: &str) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(value) => T::validate_value(value).map_err(|e| e.within(field)),
        None => Err(missing(field)),
    }
}

pub fn optional_nested<T: Validate>(obj: &JsonObject, field: &str) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(value) => T::validate_value(value).map_err(|e| e.within(field)),
        None => Ok(()),
    }
}

/// A required string member drawn from a closed set of wire values.
pub fn require_one_of(
    obj: &JsonObject,
    field: &str,
    allowed: &[&str],
) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => Ok(()),
        Some(Value::String(_)) => Err(mismatch(field, "known enumeration value")),
        Some(_) => Err(mismatch(field, "string")),
        None => Err(missing(field)),
    }
}

pub fn optional_one_of(
    obj: &JsonObject,
    field: &str,
    allowed: &[&str],
) -> Result<(), CodecError> {
    match present(obj, field) {
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => Ok(()),
        Some(Value::String(_)) => Err(mismatch(field, "known enumeration value")),
        Some(_) => Err(mismatch(field, "string")),
        None => Ok(()),
    }
}
