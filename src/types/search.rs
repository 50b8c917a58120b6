//! Search result DTOs, as returned by retrieval-backed workflow nodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;

/// The indexed document a search hit was drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultDocument {
    /// Server-assigned id; absent for documents indexed out-of-band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    /// Caller-supplied id from document upload, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for SearchResultDocument {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::optional_string(obj, "id")?;
        validate::require_string(obj, "label")?;
        validate::optional_string(obj, "external_id")
    }
}

/// One scored chunk returned from a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub score: f64,
    pub keywords: Vec<String>,
    pub document: SearchResultDocument,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for SearchResult {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::require_string(obj, "text")?;
        validate::require_number(obj, "score")?;
        validate::require_array(obj, "keywords")?;
        validate::require_nested::<SearchResultDocument>(obj, "document")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_document_failure_names_full_path() {
        let value = json!({
            "text": "chunk",
            "score": 0.8,
            "keywords": [],
            "document": {"label": 7}
        });
        let err = SearchResult::validate_value(&value).unwrap_err();
        assert!(matches!(
            err,
            CodecError::TypeMismatch { ref field, .. } if field == "document.label"
        ));
    }
}
