//! The tagged-union envelope.
//!
//! [`Tagged<U>`] pairs a decoded union value with the discriminator tag that
//! selected it, as it appeared on the wire. For unions using the default
//! capture fallback the tag is recoverable from the value itself; under the
//! coerce-first policy the envelope is the only place the original tag
//! survives, which is what lets `encode()` round-trip a tag the build has
//! never heard of.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::registry::VariantRegistry;
use crate::codec::JsonObject;
use crate::error::CodecError;

/// A union type wired to a static [`VariantRegistry`].
///
/// Implemented by the [`tagged_union!`](crate::tagged_union) macro; not
/// intended for manual implementation.
pub trait TaggedUnion: Sized + 'static {
    /// The static dispatch table for this union.
    fn registry() -> &'static VariantRegistry<Self>;

    /// The discriminator tag this value would carry on the wire.
    fn tag(&self) -> &str;

    /// The payload's fields, without the discriminator member.
    fn to_fields(&self) -> Result<JsonObject, CodecError>;
}

/// A decoded union value plus its original wire tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged<U> {
    tag: String,
    value: U,
}

impl<U: TaggedUnion> Tagged<U> {
    /// Wrap a locally-constructed value; the tag comes from the value itself.
    pub fn new(value: U) -> Self {
        Tagged {
            tag: value.tag().to_owned(),
            value,
        }
    }

    /// The discriminator tag as it appeared on the wire (or as derived from
    /// the value for locally-constructed envelopes).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn value(&self) -> &U {
        &self.value
    }

    pub fn into_value(self) -> U {
        self.value
    }

    /// Decode from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CodecError> {
        Self::from_json_value(serde_json::from_str(text)?)
    }

    /// Decode from an already-parsed JSON value.
    pub fn from_json_value(value: Value) -> Result<Self, CodecError> {
        let (tag, value) = U::registry().decode_value(value)?;
        Ok(Tagged { tag, value })
    }

    /// Encode to a single flat JSON object: the payload's fields with the
    /// stored tag written into the discriminator member. The tag is always
    /// present in the output, even when the payload shape was resolved
    /// through the fallback policy.
    pub fn to_json_value(&self) -> Result<Value, CodecError> {
        let mut fields = self.value.to_fields()?;
        fields.insert(
            U::registry().tag_field.to_owned(),
            Value::String(self.tag.clone()),
        );
        Ok(Value::Object(fields))
    }

    /// Encode to JSON text.
    pub fn to_json_string(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(&self.to_json_value()?)?)
    }
}

impl<U: TaggedUnion> From<U> for Tagged<U> {
    fn from(value: U) -> Self {
        Tagged::new(value)
    }
}

impl<U: TaggedUnion> Serialize for Tagged<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de, U: TaggedUnion> Deserialize<'de> for Tagged<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Tagged::from_json_value(value).map_err(serde::de::Error::custom)
    }
}
