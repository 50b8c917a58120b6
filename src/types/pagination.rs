//! Cursor-style pagination envelope and the document-index resources served
//! through it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::validate::{self, expect_object};
use crate::codec::{JsonObject, Validate};
use crate::error::CodecError;

/// One page of results from a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// URL of the next page. `next` on the wire; the trailing underscore
    /// avoids shadowing anything named `next` in generated call sites.
    #[serde(rename = "next", skip_serializing_if = "Option::is_none")]
    pub next_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    pub results: Vec<T>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl<T: Validate> Validate for Paginated<T> {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::optional_unsigned(obj, "count")?;
        validate::optional_string(obj, "next")?;
        validate::optional_string(obj, "previous")?;
        validate::require_array(obj, "results")
    }
}

impl<T> Paginated<T> {
    /// Whether a further page exists.
    pub fn has_next(&self) -> bool {
        self.next_.is_some()
    }
}

/// Publication state of a document index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Active,
    Archived,
}

impl EntityStatus {
    pub const WIRE_VALUES: [&'static str; 2] = ["ACTIVE", "ARCHIVED"];
}

/// A document index as read back from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentIndexRead {
    pub id: String,
    pub created: DateTime<Utc>,
    /// Human-friendly display label.
    pub label: String,
    /// Unique machine name referenced by search nodes.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Validate for DocumentIndexRead {
    fn validate_value(value: &Value) -> Result<(), CodecError> {
        let obj = expect_object(value)?;
        validate::require_string(obj, "id")?;
        validate::require_string(obj, "created")?;
        validate::require_string(obj, "label")?;
        validate::require_string(obj, "name")?;
        validate::optional_one_of(obj, "status", &EntityStatus::WIRE_VALUES)
    }
}
