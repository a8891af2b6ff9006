//! The structured payload model the redaction engine operates on.
//!
//! [`Value`] is a closed union of the shapes log payloads take: scalars,
//! ordered sequences, and string-keyed mappings. The engine never inspects
//! anything outside this union, so traversal is exhaustive and statically
//! checked.
//!
//! [`Map`] preserves insertion order. Redacted output must keep the key
//! order of its input so log diffs stay stable, which rules out hashed or
//! sorted maps. Lookups are linear scans; log payloads are small enough
//! that this is not a concern.

use std::borrow::Cow;

/// A structured value: scalar, sequence, or string-keyed mapping.
///
/// Redaction never mutates a `Value` in place. The engine produces a new
/// value with the same shape except where masking or removal applies.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent / null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Textual scalar. The only shape masking strategies rewrite.
    Text(String),
    /// Raw binary payload. Passed through opaque; hex rendering is a
    /// formatting concern, not a redaction concern.
    Bytes(Vec<u8>),
    /// Ordered sequence. Elements are never dropped, only transformed.
    Seq(Vec<Value>),
    /// String-keyed mapping with stable insertion order.
    Map(Map),
}

impl Value {
    /// Returns the text content if this is a [`Value::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the mapping if this is a [`Value::Map`].
    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns `true` for mappings and sequences.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Seq(_))
    }
}

/// A string-keyed mapping that preserves insertion order.
///
/// `insert` on an existing key replaces the value but keeps the key's
/// original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present. Existing keys keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|entry| entry.0 == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.0 == key)
            .map(|entry| &entry.1)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.0 == key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|entry| (entry.0.as_str(), &entry.1))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.0.as_str())
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// =============================================================================
// Scalar conversions
// =============================================================================

macro_rules! impl_value_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_value_from_int!(i8, i16, i32, u8, u16, u32);

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::Text(value.into_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Seq(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// =============================================================================
// serde support
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::ser::{Serialize, SerializeMap, Serializer};
    use serde_json::Value as JsonValue;

    use super::{Map, Value};

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::Null => serializer.serialize_unit(),
                Value::Bool(value) => serializer.serialize_bool(*value),
                Value::Int(value) => serializer.serialize_i64(*value),
                Value::Float(value) => serializer.serialize_f64(*value),
                Value::Text(value) => serializer.serialize_str(value),
                Value::Bytes(value) => serializer.serialize_bytes(value),
                Value::Seq(items) => serializer.collect_seq(items),
                Value::Map(map) => map.serialize(serializer),
            }
        }
    }

    impl Serialize for Map {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                state.serialize_entry(key, value)?;
            }
            state.end()
        }
    }

    impl From<JsonValue> for Value {
        fn from(value: JsonValue) -> Self {
            match value {
                JsonValue::Null => Value::Null,
                JsonValue::Bool(value) => Value::Bool(value),
                JsonValue::Number(number) => number
                    .as_i64()
                    .map(Value::Int)
                    .or_else(|| number.as_f64().map(Value::Float))
                    .unwrap_or(Value::Null),
                JsonValue::String(value) => Value::Text(value),
                JsonValue::Array(items) => {
                    Value::Seq(items.into_iter().map(Value::from).collect())
                }
                JsonValue::Object(entries) => Value::Map(
                    entries
                        .into_iter()
                        .map(|(key, value)| (key, Value::from(value)))
                        .collect(),
                ),
            }
        }
    }

    /// Lossy in two ways: bytes become arrays of numbers, and object key
    /// order follows `serde_json`'s map type. Serialize a [`Value`]
    /// directly when order matters.
    impl From<Value> for JsonValue {
        fn from(value: Value) -> Self {
            match value {
                Value::Null => JsonValue::Null,
                Value::Bool(value) => JsonValue::Bool(value),
                Value::Int(value) => JsonValue::from(value),
                Value::Float(value) => serde_json::Number::from_f64(value)
                    .map_or(JsonValue::Null, JsonValue::Number),
                Value::Text(value) => JsonValue::String(value),
                Value::Bytes(bytes) => {
                    JsonValue::Array(bytes.into_iter().map(JsonValue::from).collect())
                }
                Value::Seq(items) => {
                    JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
                }
                Value::Map(map) => JsonValue::Object(
                    map.into_iter()
                        .map(|(key, value)| (key, JsonValue::from(value)))
                        .collect(),
                ),
            }
        }
    }
}
