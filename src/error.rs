use thiserror::Error;

/// Errors produced while decoding, encoding, or validating wire JSON.
///
/// Decoding is deliberately permissive: absent optional fields and unrecognized
/// discriminator tags are not errors. Only malformed JSON, a missing
/// discriminator member, or an explicit validation pass can fail.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {found}")]
    ExpectedObject { found: &'static str },

    #[error("missing discriminator field `{field}`")]
    MissingDiscriminator { field: &'static str },

    #[error("field `{field}` is not the expected type (expected {expected})")]
    TypeMismatch { field: String, expected: &'static str },

    #[error("required field `{field}` is missing")]
    MissingField { field: String },

    #[error("tag `{tag}` matched no variant of the union")]
    UnresolvedVariant { tag: String },
}

impl CodecError {
    /// Re-root a field-path error underneath a parent field, so that a failure
    /// inside a nested object reads `value.message` rather than `message`.
    pub(crate) fn within(self, parent: &str) -> Self {
        match self {
            CodecError::TypeMismatch { field, expected } => CodecError::TypeMismatch {
                field: format!("{parent}.{field}"),
                expected,
            },
            CodecError::MissingField { field } => CodecError::MissingField {
                field: format!("{parent}.{field}"),
            },
            CodecError::ExpectedObject { .. } => CodecError::TypeMismatch {
                field: parent.to_owned(),
                expected: "object",
            },
            other => other,
        }
    }
}

/// Errors surfaced by the HTTP clients.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("invalid client configuration: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_prefixes_field_paths() {
        let err = CodecError::TypeMismatch {
            field: "message".to_owned(),
            expected: "string",
        }
        .within("value");
        assert_eq!(
            err.to_string(),
            "field `value.message` is not the expected type (expected string)"
        );
    }

    #[test]
    fn test_within_converts_expected_object() {
        let err = CodecError::ExpectedObject { found: "number" }.within("value");
        assert!(matches!(
            err,
            CodecError::TypeMismatch { ref field, expected: "object" } if field == "value"
        ));
    }

    #[test]
    fn test_api_error_display() {
        let err = ClientError::Api {
            status: 403,
            body: "forbidden".to_owned(),
        };
        assert_eq!(err.to_string(), "API error (status 403): forbidden");
    }
}
