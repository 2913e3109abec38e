//! Declaration macros for payload models.
//!
//! These expand a braced field list into the struct itself plus the
//! [`FromPayload`](super::FromPayload) implementation that materializes it,
//! so a schema is declared exactly once. The expanded field list is the
//! static per-type schema table the engine walks at runtime.

/// Declares a typed payload model.
///
/// Expands to the struct plus a `FromPayload` implementation that
/// materializes it from a JSON object: declared fields are coerced through
/// their own `FromPayload` implementations in declaration order, and
/// payload keys with no declared field are retained on the `extra`
/// sidecar. Keyword field names use raw identifiers (`r#type`) and still
/// look up the plain payload key.
///
/// ```ignore
/// model! {
///     /// A label attached to an issue or pull request.
///     pub struct Label {
///         pub id: u64,
///         pub name: String,
///         pub description: Option<String>,
///     }
/// }
/// ```
macro_rules! model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident: $ftype:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ftype,
            )*
            /// Payload keys with no declared field, in payload order.
            #[serde(flatten)]
            pub extra: $crate::model::Extra,
        }

        impl $crate::model::FromPayload for $name {
            const EXPECTED: &'static str = concat!("a ", stringify!($name), " object");

            fn matches(value: &::serde_json::Value) -> bool {
                value.is_object()
            }

            fn from_value(value: ::serde_json::Value) -> Result<Self, $crate::model::ModelError> {
                let mut payload = $crate::model::expect_object(stringify!($name), value)?;
                Ok(Self {
                    $(
                        $field: $crate::model::take_field(
                            &mut payload,
                            stringify!($name),
                            stringify!($field),
                        )?,
                    )*
                    extra: $crate::model::Extra::from_map(payload),
                })
            }
        }

        impl $name {
            /// Materializes an instance from a decoded JSON payload.
            pub fn from_value(
                value: ::serde_json::Value,
            ) -> Result<Self, $crate::model::ModelError> {
                <Self as $crate::model::FromPayload>::from_value(value)
            }
        }
    };
}

/// Declares a string-literal enumeration.
///
/// Variants resolve from payloads by exact literal match; any other string
/// is an unknown-literal error. `as_str`, `Display`, and `FromStr` round
/// the type out for callers that format or parse literals themselves.
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $literal:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $literal)]
                $variant,
            )*
        }

        impl $name {
            /// The upstream literal for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::model::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok(Self::$variant),)*
                    _ => Err($crate::model::ModelError::UnknownLiteral {
                        name: stringify!($name),
                        literal: s.to_string(),
                    }),
                }
            }
        }

        impl $crate::model::FromPayload for $name {
            const EXPECTED: &'static str = concat!("a ", stringify!($name), " literal");

            fn matches(value: &::serde_json::Value) -> bool {
                value.is_string()
            }

            fn from_value(value: ::serde_json::Value) -> Result<Self, $crate::model::ModelError> {
                match value {
                    ::serde_json::Value::String(s) => s.parse(),
                    value => Err($crate::model::ModelError::UnexpectedType {
                        expected: <Self as $crate::model::FromPayload>::EXPECTED,
                        value,
                    }),
                }
            }
        }
    };
}

/// Declares a union over payload types.
///
/// Resolution inspects the runtime JSON kind of the value: the first
/// candidate whose kind matches exactly wins, and a value matching no
/// candidate is coerced into the first declared one, whose failure then
/// propagates. Model-typed members all match on objects, so a union of
/// models always materializes its first member; there is no
/// trial-construction against the others.
macro_rules! payload_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])*
            $first:ident($first_ty:ty),
            $(
                $(#[$vmeta:meta])*
                $variant:ident($vty:ty),
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        #[serde(untagged)]
        $vis enum $name {
            $(#[$first_meta])*
            $first($first_ty),
            $(
                $(#[$vmeta])*
                $variant($vty),
            )*
        }

        impl $crate::model::FromPayload for $name {
            const EXPECTED: &'static str = concat!("a ", stringify!($name), " value");

            fn matches(value: &::serde_json::Value) -> bool {
                <$first_ty as $crate::model::FromPayload>::matches(value)
                    $(|| <$vty as $crate::model::FromPayload>::matches(value))*
            }

            fn from_value(value: ::serde_json::Value) -> Result<Self, $crate::model::ModelError> {
                if <$first_ty as $crate::model::FromPayload>::matches(&value) {
                    return <$first_ty as $crate::model::FromPayload>::from_value(value)
                        .map(Self::$first);
                }
                $(
                    if <$vty as $crate::model::FromPayload>::matches(&value) {
                        return <$vty as $crate::model::FromPayload>::from_value(value)
                            .map(Self::$variant);
                    }
                )*
                <$first_ty as $crate::model::FromPayload>::from_value(value).map(Self::$first)
            }
        }
    };
}

pub(crate) use {model, payload_union, str_enum};
