//! Wire codec core: tagged unions, variant registries, and the JSON boundary
//! validator.
//!
//! Every Tapestry union is a single flat JSON object on the wire, with one
//! reserved string member (usually `type`) carrying the discriminator tag and
//! the selected variant's fields alongside it. This module provides:
//!
//! - [`VariantRegistry`]: a static, per-union table mapping tag strings to
//!   variant codecs, with a configurable [`Fallback`] policy for tags the
//!   build does not know about.
//! - [`Tagged`]: an envelope that retains the *original* wire tag across a
//!   decode/encode round trip, even when the payload was resolved through the
//!   fallback policy.
//! - [`Validate`]: a structural check for externally-sourced JSON, run before
//!   trusting a response body. Decoding itself is permissive; validation is
//!   the loud, field-naming boundary.
//! - [`tagged_union!`](crate::tagged_union): the macro that wires a Rust enum
//!   to all of the above.

pub mod registry;
pub mod tagged;
pub mod validate;

mod macros;

pub use registry::{Fallback, UnknownVariant, Variant, VariantRegistry};
pub use tagged::{Tagged, TaggedUnion};
pub use validate::Validate;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;

/// A JSON object as held in unknown-field bags and registry plumbing.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Decode any DTO from JSON text.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Encode any DTO to JSON text.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, CodecError> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize a payload and return its fields as an object map.
///
/// Union payloads are records, so anything else here is a programming error
/// surfaced as [`CodecError::ExpectedObject`].
pub fn fields_of<T: Serialize>(payload: &T) -> Result<JsonObject, CodecError> {
    match serde_json::to_value(payload)? {
        serde_json::Value::Object(fields) => Ok(fields),
        other => Err(CodecError::ExpectedObject {
            found: validate::json_type_name(&other),
        }),
    }
}
