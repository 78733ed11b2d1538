//! Loosely-typed request parameters.
//!
//! Query strings only ever carry text, but parameters decoded from JSON
//! bodies or assembled by callers can hold numbers and booleans too.
//! [`RequestParams`] keeps insertion order so that filtered parameter sets
//! render back into links in the order the client sent them.

use std::fmt;

use url::form_urlencoded;

/// A single request parameter value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// String form of the value as a scripting-style request layer would
    /// cast it: `true` becomes `"1"`, `false` and null become `""`.
    pub fn to_param_string(&self) -> String {
        match self {
            ParamValue::Text(text) => text.clone(),
            ParamValue::Int(value) => value.to_string(),
            ParamValue::Float(value) => format_float(*value),
            ParamValue::Bool(true) => "1".to_string(),
            ParamValue::Bool(false) | ParamValue::Null => String::new(),
        }
    }

    /// Loose comparison against a string.
    ///
    /// Two numeric strings compare by value (`"01"` equals `"1"`), numbers
    /// compare against numeric strings by value, booleans compare by
    /// truthiness and null only equals the empty string. Integers are
    /// compared exactly before falling back to floating point.
    pub fn loosely_eq_str(&self, other: &str) -> bool {
        match self {
            ParamValue::Text(text) => {
                if let (Some(a), Some(b)) = (parse_integer(text), parse_integer(other)) {
                    return a == b;
                }
                match (parse_numeric(text), parse_numeric(other)) {
                    (Some(a), Some(b)) => a == b,
                    _ => text == other,
                }
            }
            ParamValue::Int(value) => match parse_integer(other) {
                Some(b) => *value == b,
                None => parse_numeric(other).is_some_and(|b| *value as f64 == b),
            },
            ParamValue::Float(value) => {
                parse_numeric(other).is_some_and(|b| *value == b)
            }
            ParamValue::Bool(value) => *value == is_truthy(other),
            ParamValue::Null => other.is_empty(),
        }
    }

    /// Rendering used when serializing into a URL query string.
    /// Returns `None` for values that are dropped from query strings.
    fn query_repr(&self) -> Option<String> {
        match self {
            ParamValue::Null => None,
            ParamValue::Bool(false) => Some("0".to_string()),
            other => Some(other.to_param_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_param_string())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn is_truthy(raw: &str) -> bool {
    !raw.is_empty() && raw != "0"
}

/// Parse an integer string that fits in `i64`, allowing surrounding whitespace.
fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Parse a numeric string, allowing surrounding whitespace but rejecting
/// the textual `inf`/`nan` spellings `f64::from_str` would accept.
fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let first = trimmed.chars().next()?;
    if !(first.is_ascii_digit() || matches!(first, '.' | '+' | '-')) {
        return None;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Insertion-ordered request parameter map.
///
/// Inserting an existing key overwrites its value without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    entries: Vec<(String, ParamValue)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Parse a URL query string. A leading `?` is ignored and a repeated
    /// key keeps its first position but takes the last value.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Serialize into a URL query string. Null values are skipped.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            if let Some(repr) = value.query_repr() {
                serializer.append_pair(key, &repr);
            }
        }
        serializer.finish()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ParamValue> {
        self.entries
            .iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Keep only the entries for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &ParamValue) -> bool) {
        self.entries.retain(|(key, value)| keep(key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RequestParams::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for RequestParams {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::{Map, Number, Value};

    use super::{ParamValue, RequestParams};
    use crate::error::ModelError;

    impl Serialize for RequestParams {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for RequestParams {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct ParamsVisitor;

            impl<'de> Visitor<'de> for ParamsVisitor {
                type Value = RequestParams;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str("a map of request parameters")
                }

                fn visit_map<A: MapAccess<'de>>(
                    self,
                    mut access: A,
                ) -> Result<Self::Value, A::Error> {
                    let mut params =
                        RequestParams::with_capacity(access.size_hint().unwrap_or(0));
                    while let Some((key, value)) =
                        access.next_entry::<String, ParamValue>()?
                    {
                        params.insert(key, value);
                    }
                    Ok(params)
                }
            }

            deserializer.deserialize_map(ParamsVisitor)
        }
    }

    impl TryFrom<Value> for RequestParams {
        type Error = ModelError;

        fn try_from(value: Value) -> Result<Self, Self::Error> {
            let Value::Object(map) = value else {
                return Err(ModelError::NotAnObject);
            };
            let mut params = RequestParams::with_capacity(map.len());
            for (key, value) in map {
                let value = match value {
                    Value::Null => ParamValue::Null,
                    Value::Bool(flag) => ParamValue::Bool(flag),
                    Value::String(text) => ParamValue::Text(text),
                    Value::Number(number) => match number.as_i64() {
                        Some(int) => ParamValue::Int(int),
                        None => ParamValue::Float(number.as_f64().unwrap_or(f64::NAN)),
                    },
                    Value::Array(_) | Value::Object(_) => {
                        return Err(ModelError::UnsupportedValue { key });
                    }
                };
                params.insert(key, value);
            }
            Ok(params)
        }
    }

    impl From<RequestParams> for Value {
        fn from(params: RequestParams) -> Self {
            let map: Map<String, Value> = params
                .into_iter()
                .map(|(key, value)| {
                    let value = match value {
                        ParamValue::Text(text) => Value::String(text),
                        ParamValue::Int(int) => Value::Number(int.into()),
                        ParamValue::Float(float) => {
                            Number::from_f64(float).map_or(Value::Null, Value::Number)
                        }
                        ParamValue::Bool(flag) => Value::Bool(flag),
                        ParamValue::Null => Value::Null,
                    };
                    (key, value)
                })
                .collect();
            Value::Object(map)
        }
    }
}
