//! The `tagged_union!` macro: a compile-time-checked mapping from wire tag to
//! enum variant.
//!
//! Each invocation produces a closed Rust enum, its static
//! [`VariantRegistry`](crate::codec::VariantRegistry), a
//! [`TaggedUnion`](crate::codec::TaggedUnion) impl, a
//! [`Validate`](crate::codec::Validate) impl, and `From<Payload>` conversions
//! for ergonomic construction. The default form appends an
//! `Unknown(UnknownVariant)` case so that tags added server-side after this
//! build decode losslessly instead of being guessed at; the `coerce_first`
//! form reproduces the legacy wire behavior of decoding unrecognized tags with
//! the first registered variant's codec (such unions round-trip foreign tags
//! only through a [`Tagged`](crate::codec::Tagged) envelope, so they do not
//! get direct serde impls).

/// Define a tagged union over a set of payload types.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use serde_json::Value;
/// use tapestry_client::codec::{self, Validate};
/// use tapestry_client::error::CodecError;
/// use tapestry_client::tagged_union;
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// pub struct Ping {
///     pub seq: u64,
/// }
///
/// impl Validate for Ping {
///     fn validate_value(value: &Value) -> Result<(), CodecError> {
///         let obj = codec::validate::expect_object(value)?;
///         codec::validate::optional_unsigned(obj, "seq")
///     }
/// }
///
/// tagged_union! {
///     /// A one-variant union.
///     pub enum Probe, tag = "type" {
///         "PING" => Ping(Ping),
///     }
/// }
/// ```
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident, tag = $tag_field:literal {
            $($tag:literal => $variant:ident($payload:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $($variant($payload),)+
            /// Payload of a discriminator tag this build does not know about.
            Unknown($crate::codec::UnknownVariant),
        }

        $crate::tagged_union!(@shared $name, $tag_field,
            fallback = $crate::codec::Fallback::Capture($name::Unknown),
            { $($tag => $variant($payload)),+ });

        impl $crate::codec::TaggedUnion for $name {
            fn registry() -> &'static $crate::codec::VariantRegistry<Self> {
                &Self::REGISTRY
            }

            fn tag(&self) -> &str {
                match self {
                    $($name::$variant(_) => $tag,)+
                    $name::Unknown(raw) => &raw.tag,
                }
            }

            fn to_fields(
                &self,
            ) -> ::std::result::Result<$crate::codec::JsonObject, $crate::error::CodecError> {
                match self {
                    $($name::$variant(payload) => $crate::codec::fields_of(payload),)+
                    $name::Unknown(raw) => Ok(raw.fields.clone()),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                $crate::codec::Tagged::new(self.clone())
                    .to_json_value()
                    .map_err(::serde::ser::Error::custom)?
                    .serialize(serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let value = ::serde_json::Value::deserialize(deserializer)?;
                $crate::codec::Tagged::<$name>::from_json_value(value)
                    .map($crate::codec::Tagged::into_value)
                    .map_err(::serde::de::Error::custom)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident, tag = $tag_field:literal, fallback = coerce_first {
            $($tag:literal => $variant:ident($payload:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $($variant($payload),)+
        }

        $crate::tagged_union!(@shared $name, $tag_field,
            fallback = $crate::codec::Fallback::CoerceFirst,
            { $($tag => $variant($payload)),+ });

        impl $crate::codec::TaggedUnion for $name {
            fn registry() -> &'static $crate::codec::VariantRegistry<Self> {
                &Self::REGISTRY
            }

            fn tag(&self) -> &str {
                match self {
                    $($name::$variant(_) => $tag,)+
                }
            }

            fn to_fields(
                &self,
            ) -> ::std::result::Result<$crate::codec::JsonObject, $crate::error::CodecError> {
                match self {
                    $($name::$variant(payload) => $crate::codec::fields_of(payload),)+
                }
            }
        }
    };

    (@shared $name:ident, $tag_field:literal, fallback = $fallback:expr,
        { $($tag:literal => $variant:ident($payload:ty)),+ }
    ) => {
        impl $name {
            const REGISTRY: $crate::codec::VariantRegistry<$name> =
                $crate::codec::VariantRegistry {
                    tag_field: $tag_field,
                    variants: &[
                        $(
                            $crate::codec::Variant {
                                tag: $tag,
                                decode: |fields| {
                                    let payload: $payload = ::serde_json::from_value(
                                        ::serde_json::Value::Object(fields),
                                    )?;
                                    Ok($name::$variant(payload))
                                },
                                validate:
                                    <$payload as $crate::codec::Validate>::validate_value,
                            },
                        )+
                    ],
                    fallback: $fallback,
                };
        }

        impl $crate::codec::Validate for $name {
            fn validate_value(
                value: &::serde_json::Value,
            ) -> ::std::result::Result<(), $crate::error::CodecError> {
                <Self as $crate::codec::TaggedUnion>::registry().validate_value(value)
            }
        }

        $(
            impl ::std::convert::From<$payload> for $name {
                fn from(payload: $payload) -> Self {
                    $name::$variant(payload)
                }
            }
        )+
    };
}
