//! Static per-union dispatch tables.
//!
//! A [`VariantRegistry`] is built once per union type (by the
//! [`tagged_union!`](crate::tagged_union) macro) as a plain `static`: an
//! ordered list of `(tag, codec)` pairs plus a fallback policy. Registries are
//! immutable and safe for unsynchronized concurrent reads.

use serde_json::Value;

use crate::codec::JsonObject;
use crate::codec::validate::json_type_name;
use crate::error::CodecError;

/// One registered shape of a tagged union.
pub struct Variant<U: 'static> {
    /// The wire discriminator value selecting this variant.
    pub tag: &'static str,
    /// Decode the payload from the object's remaining fields (discriminator
    /// member already removed).
    pub decode: fn(JsonObject) -> Result<U, CodecError>,
    /// Structural check for this variant's payload shape.
    pub validate: fn(&Value) -> Result<(), CodecError>,
}

/// The raw payload of a discriminator value this build does not recognize.
///
/// `fields` holds every object member except the discriminator itself, so the
/// original body survives a round trip byte-for-byte (modulo member order).
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariant {
    pub tag: String,
    pub fields: JsonObject,
}

/// Policy applied when a discriminator tag matches no registered variant.
pub enum Fallback<U: 'static> {
    /// Wrap the raw tag and payload in an explicit unknown-tag variant.
    /// Nothing is guessed and nothing is lost. This is the default.
    Capture(fn(UnknownVariant) -> U),
    /// Decode the payload with the first registered variant's codec. Mirrors
    /// servers that treat the first variant as the wire default; the original
    /// tag survives only in the surrounding [`Tagged`](crate::codec::Tagged)
    /// envelope.
    CoerceFirst,
}

/// Immutable mapping from discriminator tag to variant codec for one union.
pub struct VariantRegistry<U: 'static> {
    /// Name of the reserved discriminator member, usually `"type"`.
    pub tag_field: &'static str,
    /// Ordered variant table. Must be non-empty.
    pub variants: &'static [Variant<U>],
    pub fallback: Fallback<U>,
}

impl<U> VariantRegistry<U> {
    /// Look up the codec for a tag. Unknown tags return `None`; the caller
    /// applies the fallback policy.
    pub fn resolve(&self, tag: &str) -> Option<&Variant<U>> {
        self.variants.iter().find(|v| v.tag == tag)
    }

    /// Decode a parsed JSON value into `(original tag, union value)`.
    ///
    /// The discriminator member is stripped from the object before the payload
    /// codec runs, so flattened unknown-field bags never capture it.
    pub fn decode_value(&self, value: Value) -> Result<(String, U), CodecError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(CodecError::ExpectedObject {
                    found: json_type_name(&other),
                });
            }
        };
        let tag = match fields.remove(self.tag_field) {
            Some(Value::String(tag)) => tag,
            Some(_) => {
                return Err(CodecError::TypeMismatch {
                    field: self.tag_field.to_owned(),
                    expected: "string",
                });
            }
            None => {
                return Err(CodecError::MissingDiscriminator {
                    field: self.tag_field,
                });
            }
        };

        match self.resolve(&tag) {
            Some(variant) => {
                let value = (variant.decode)(fields)?;
                Ok((tag, value))
            }
            None => match self.fallback {
                Fallback::Capture(wrap) => {
                    log::debug!("capturing unknown discriminator tag `{tag}`");
                    let raw = UnknownVariant {
                        tag: tag.clone(),
                        fields,
                    };
                    Ok((tag, wrap(raw)))
                }
                Fallback::CoerceFirst => {
                    let first = &self.variants[0];
                    log::warn!(
                        "unknown discriminator tag `{tag}`, coercing payload to `{}`",
                        first.tag
                    );
                    let value = (first.decode)(fields)?;
                    Ok((tag, value))
                }
            },
        }
    }

    /// Structurally validate a raw JSON value against the union.
    ///
    /// An unrecognized tag passes under [`Fallback::Capture`] (the unknown
    /// case is an explicit part of the model) and fails with
    /// [`CodecError::UnresolvedVariant`] under [`Fallback::CoerceFirst`].
    pub fn validate_value(&self, value: &Value) -> Result<(), CodecError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(CodecError::ExpectedObject {
                    found: json_type_name(other),
                });
            }
        };
        let tag = match fields.get(self.tag_field) {
            Some(Value::String(tag)) => tag,
            Some(_) => {
                return Err(CodecError::TypeMismatch {
                    field: self.tag_field.to_owned(),
                    expected: "string",
                });
            }
            None => {
                return Err(CodecError::MissingDiscriminator {
                    field: self.tag_field,
                });
            }
        };

        match self.resolve(tag) {
            Some(variant) => (variant.validate)(value),
            None => match self.fallback {
                Fallback::Capture(_) => Ok(()),
                Fallback::CoerceFirst => Err(CodecError::UnresolvedVariant { tag: tag.clone() }),
            },
        }
    }
}
