//! The payload materialization engine.
//!
//! Everything in this crate funnels through two pieces that live here:
//!
//! - [`FromPayload`] - the type coercion resolver. One implementation per
//!   declared field type decides how a raw [`serde_json::Value`] becomes a
//!   typed value, recursing through nested models, sequences, optionals,
//!   and unions.
//! - the `model!` machinery - the record materializer. A declared field
//!   list expands into a struct plus a `FromPayload` implementation that
//!   walks a payload object field by field, coerces each value, and
//!   retains undeclared keys on an [`Extra`] sidecar.
//!
//! The two are mutually recursive: the materializer resolves each field
//! through `FromPayload`, and model-typed fields resolve by materializing.
//!
//! # Example
//!
//! ```
//! use octomodels::github::models::Artifact;
//! use serde_json::json;
//!
//! let artifact = Artifact::from_value(json!({
//!     "id": 11,
//!     "node_id": "MDg6QXJ0aWZhY3QxMQ==",
//!     "name": "Rails",
//!     "size_in_bytes": 556,
//!     "url": "https://api.github.com/repos/octo-org/octo-docs/actions/artifacts/11",
//!     "archive_download_url": "https://api.github.com/repos/octo-org/octo-docs/actions/artifacts/11/zip",
//!     "expired": false,
//!     "created_at": "2020-01-10T14:59:22Z",
//! })).unwrap();
//!
//! assert_eq!(artifact.name, "Rails");
//! ```

pub(crate) mod macros;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::map::Entry;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while materializing a model from a payload.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The payload handed to a model was not a JSON object.
    #[error("invalid payload for {model}: expected an object, got {}", value_kind(.value))]
    InvalidPayload {
        model: &'static str,
        value: Value,
    },

    /// A field value could not be coerced into its declared type. The
    /// offending raw value travels in the source error.
    #[error("could not set value for field `{field}` of {model}")]
    Coercion {
        model: &'static str,
        field: &'static str,
        #[source]
        source: Box<ModelError>,
    },

    /// A field without a declared default was absent from the payload.
    /// This is a schema/payload contract mismatch, not a coercion failure,
    /// and is never wrapped further.
    #[error("missing required field `{field}` for {model}")]
    MissingField {
        model: &'static str,
        field: &'static str,
    },

    /// A value had the wrong JSON kind for its declared type.
    #[error("expected {expected}, got {}: {value}", value_kind(.value))]
    UnexpectedType {
        expected: &'static str,
        value: Value,
    },

    /// A string matched no literal of a string enumeration.
    #[error("`{literal}` is not a valid {name}")]
    UnknownLiteral {
        name: &'static str,
        literal: String,
    },

    /// A timestamp string matched none of the accepted formats.
    #[error("invalid timestamp `{input}`")]
    InvalidTimestamp { input: String },

    /// A calendar date string was not an ISO date.
    #[error("invalid calendar date `{input}`")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A string was not a well-formed UUID.
    #[error("invalid UUID `{input}`")]
    InvalidUuid {
        input: String,
        #[source]
        source: uuid::Error,
    },
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Coercion of a decoded JSON value into a declared field type.
///
/// Implementations exist for plain scalars, timestamps, calendar dates,
/// opaque maps, `Vec<T>`, `Option<T>`, and every type declared through the
/// model macros. The declared type of a field picks the implementation, so
/// the dispatch that dynamic API clients do by runtime reflection happens
/// here at compile time.
pub trait FromPayload: Sized {
    /// Human-readable expectation used in error messages.
    const EXPECTED: &'static str;

    /// Whether the runtime JSON kind of `value` matches this type exactly.
    ///
    /// Union types use this to pick a candidate before falling back to
    /// their first declared member.
    fn matches(value: &Value) -> bool;

    /// Coerces `value` into this type.
    fn from_value(value: Value) -> Result<Self, ModelError>;

    /// The value to use when the field key is present with an explicit
    /// JSON null. `None` means the field cannot hold null.
    fn from_null() -> Option<Self> {
        None
    }

    /// The value to use when the field key is absent from the payload.
    /// `None` means the field has no declared default.
    fn absent() -> Option<Self> {
        None
    }
}

impl FromPayload for String {
    const EXPECTED: &'static str = "a string";

    fn matches(value: &Value) -> bool {
        value.is_string()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::String(s) => Ok(s),
            value => Err(ModelError::UnexpectedType {
                expected: Self::EXPECTED,
                value,
            }),
        }
    }
}

impl FromPayload for bool {
    const EXPECTED: &'static str = "a boolean";

    fn matches(value: &Value) -> bool {
        value.is_boolean()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Bool(b) => Ok(b),
            value => Err(ModelError::UnexpectedType {
                expected: Self::EXPECTED,
                value,
            }),
        }
    }
}

impl FromPayload for u64 {
    const EXPECTED: &'static str = "an unsigned integer";

    fn matches(value: &Value) -> bool {
        value.as_u64().is_some()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value.as_u64() {
            Some(n) => Ok(n),
            None => Err(ModelError::UnexpectedType {
                expected: Self::EXPECTED,
                value,
            }),
        }
    }
}

impl FromPayload for i64 {
    const EXPECTED: &'static str = "an integer";

    fn matches(value: &Value) -> bool {
        value.as_i64().is_some()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value.as_i64() {
            Some(n) => Ok(n),
            None => Err(ModelError::UnexpectedType {
                expected: Self::EXPECTED,
                value,
            }),
        }
    }
}

impl FromPayload for f64 {
    const EXPECTED: &'static str = "a number";

    // Exact-kind match only covers actual floats; integers in a union
    // resolve to their integer member first.
    fn matches(value: &Value) -> bool {
        value.is_f64()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value.as_f64() {
            Some(n) => Ok(n),
            None => Err(ModelError::UnexpectedType {
                expected: Self::EXPECTED,
                value,
            }),
        }
    }
}

impl FromPayload for DateTime<Utc> {
    const EXPECTED: &'static str = "a timestamp string";

    fn matches(value: &Value) -> bool {
        value.is_string()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::String(s) => parse_timestamp(&s),
            value => Err(ModelError::UnexpectedType {
                expected: Self::EXPECTED,
                value,
            }),
        }
    }
}

impl FromPayload for Uuid {
    const EXPECTED: &'static str = "a UUID string";

    fn matches(value: &Value) -> bool {
        value.is_string()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::String(s) => Uuid::parse_str(&s).map_err(|source| ModelError::InvalidUuid {
                input: s,
                source,
            }),
            value => Err(ModelError::UnexpectedType {
                expected: Self::EXPECTED,
                value,
            }),
        }
    }
}

impl FromPayload for NaiveDate {
    const EXPECTED: &'static str = "a calendar date string";

    fn matches(value: &Value) -> bool {
        value.is_string()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::String(s) => parse_calendar_date(&s),
            value => Err(ModelError::UnexpectedType {
                expected: Self::EXPECTED,
                value,
            }),
        }
    }
}

/// Declared-type-unknown passthrough: the raw value is kept as is.
impl FromPayload for Value {
    const EXPECTED: &'static str = "any value";

    fn matches(_value: &Value) -> bool {
        true
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        Ok(value)
    }

    fn from_null() -> Option<Self> {
        Some(Value::Null)
    }
}

/// Opaque object passthrough for fields declared as generic mappings.
impl FromPayload for Map<String, Value> {
    const EXPECTED: &'static str = "an object";

    fn matches(value: &Value) -> bool {
        value.is_object()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Ok(map),
            value => Err(ModelError::UnexpectedType {
                expected: Self::EXPECTED,
                value,
            }),
        }
    }
}

impl<T: FromPayload> FromPayload for Vec<T> {
    const EXPECTED: &'static str = "an array";

    fn matches(value: &Value) -> bool {
        value.is_array()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Array(items) => items.into_iter().map(T::from_value).collect(),
            value => Err(ModelError::UnexpectedType {
                expected: Self::EXPECTED,
                value,
            }),
        }
    }

    // Sequence fields absent from the payload default to empty.
    fn absent() -> Option<Self> {
        Some(Vec::new())
    }
}

impl<T: FromPayload> FromPayload for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn matches(value: &Value) -> bool {
        value.is_null() || T::matches(value)
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }

    fn from_null() -> Option<Self> {
        Some(None)
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

/// Self-referential models (a team's parent team) box the recursion.
impl<T: FromPayload> FromPayload for Box<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn matches(value: &Value) -> bool {
        T::matches(value)
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        T::from_value(value).map(Box::new)
    }

    fn from_null() -> Option<Self> {
        T::from_null().map(Box::new)
    }

    fn absent() -> Option<Self> {
        T::absent().map(Box::new)
    }
}

/// Parses a timestamp from the formats the upstream APIs actually emit.
///
/// Tried in order:
/// 1. RFC 3339, covering a literal `Z` or a `+00:00` style numeric
///    offset, with or without fractional seconds
/// 2. a numeric offset without a colon (`+0000`)
/// 3. a bare date-time with no offset at all, which is taken as UTC so
///    that every materialized timestamp stays comparable to the rest
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, ModelError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    Err(ModelError::InvalidTimestamp {
        input: input.to_string(),
    })
}

/// Parses an ISO calendar date (`2023-03-07`), with no time-of-day part.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| ModelError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Enforces the payload-must-be-an-object precondition for a model.
pub fn expect_object(model: &'static str, value: Value) -> Result<Map<String, Value>, ModelError> {
    match value {
        Value::Object(map) => {
            tracing::trace!(model, "materializing payload");
            Ok(map)
        }
        value => Err(ModelError::InvalidPayload { model, value }),
    }
}

/// Removes and coerces one declared field from a payload object.
///
/// A present null passes through untouched (it must never be coerced into
/// a date, enum, or nested model), an absent key falls back to the type's
/// declared default, and any coercion failure is rewrapped to name the
/// owning model and field. Materialization stops at the first failure.
pub fn take_field<T: FromPayload>(
    payload: &mut Map<String, Value>,
    model: &'static str,
    field: &'static str,
) -> Result<T, ModelError> {
    let key = field_key(field);
    match payload.remove(key) {
        None => T::absent().ok_or(ModelError::MissingField { model, field: key }),
        Some(Value::Null) => T::from_null().ok_or_else(|| ModelError::Coercion {
            model,
            field: key,
            source: Box::new(ModelError::UnexpectedType {
                expected: T::EXPECTED,
                value: Value::Null,
            }),
        }),
        Some(value) => T::from_value(value).map_err(|source| ModelError::Coercion {
            model,
            field: key,
            source: Box::new(source),
        }),
    }
}

/// Strips the raw-identifier prefix so keyword fields (`r#type`, `r#ref`)
/// look up their payload key correctly.
pub(crate) fn field_key(name: &'static str) -> &'static str {
    name.trim_start_matches("r#")
}

/// Payload keys with no declared field, retained on the materialized model.
///
/// Every model generated by the `model!` macro carries an `extra` sidecar
/// of this type. Values keep their raw JSON shape and payload order;
/// nested objects are reachable with dotted paths:
///
/// ```
/// use octomodels::Extra;
/// use serde_json::json;
///
/// let mut extra = Extra::default();
/// extra.set("performed_via_github_app", json!({"id": 1, "slug": "ci"}));
///
/// assert_eq!(extra.get("performed_via_github_app.slug"), Some(&json!("ci")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extra {
    attrs: Map<String, Value>,
}

impl Extra {
    pub(crate) fn from_map(attrs: Map<String, Value>) -> Self {
        if !attrs.is_empty() {
            tracing::trace!(keys = ?attrs.keys().collect::<Vec<_>>(), "retaining undeclared payload keys");
        }
        Self { attrs }
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Looks up a retained value by dotted path.
    ///
    /// Each path segment after the first descends into a nested object;
    /// the lookup fails softly with `None` if any segment is missing or
    /// not an object.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.attrs.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Attaches a value under a dotted path, mirroring [`Extra::get`]:
    /// each segment after the first names a nested object, created on
    /// demand. Object values merge into an already retained object at the
    /// target instead of replacing it; any other value replaces.
    pub fn set(&mut self, path: &str, value: Value) {
        let mut segments = path.rsplit('.');
        let mut key = segments.next().unwrap_or(path);
        let mut nested = value;
        for segment in segments {
            let mut wrapper = Map::new();
            wrapper.insert(key.to_string(), nested);
            nested = Value::Object(wrapper);
            key = segment;
        }
        let mut data = Map::new();
        data.insert(key.to_string(), nested);
        merge_into(&mut self.attrs, data);
    }

    /// The retained keys, in payload order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.attrs
    }
}

fn merge_into(target: &mut Map<String, Value>, data: Map<String, Value>) {
    for (key, value) in data {
        match target.entry(key) {
            Entry::Occupied(mut slot) => match (slot.get_mut(), value) {
                (Value::Object(existing), Value::Object(incoming)) => {
                    merge_into(existing, incoming);
                }
                (slot_value, value) => *slot_value = value,
            },
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}

impl Serialize for Extra {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.attrs.serialize(serializer)
    }
}
