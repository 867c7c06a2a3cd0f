//! Defensive field access
//!
//! `Fields` reads keys off a JSON object and substitutes defaults instead of
//! failing. `Shape` classifies fields the server sends either as a bare
//! string or as an object.

use crate::types::JsonObject;
use serde_json::Value;

/// Conversion from one raw JSON value into a typed entity
pub trait FromRaw: Sized {
    /// Map a raw value. Never fails; absent data maps to defaults.
    fn from_raw(raw: &Value) -> Self;

    /// Map an optional nested value.
    ///
    /// Absent keys, `null`, non-objects, and empty objects yield `None`.
    fn from_nested(raw: Option<&Value>) -> Option<Self> {
        match raw {
            Some(value @ Value::Object(map)) if !map.is_empty() => Some(Self::from_raw(value)),
            _ => None,
        }
    }
}

/// A field that may arrive as a bare string or as a structured object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Missing, `null`, empty, or of an unexpected JSON type
    Absent,
    /// A non-empty string
    Scalar(&'a str),
    /// A non-empty object
    Object(&'a JsonObject),
}

impl<'a> Shape<'a> {
    /// Classify a value
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::String(s)) if !s.is_empty() => Self::Scalar(s),
            Some(Value::Object(map)) if !map.is_empty() => Self::Object(map),
            _ => Self::Absent,
        }
    }
}

/// Read-only view over a JSON object with defaulting accessors
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    map: Option<&'a JsonObject>,
}

impl<'a> Fields<'a> {
    /// View a value; non-objects behave like an empty object
    pub fn of(raw: &'a Value) -> Self {
        Self {
            map: raw.as_object(),
        }
    }

    /// View an object directly
    pub fn from_map(map: &'a JsonObject) -> Self {
        Self { map: Some(map) }
    }

    /// Raw value under `key`, treating `null` as absent
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.map?.get(key).filter(|v| !v.is_null())
    }

    /// Required string; empty when missing or not a string
    pub fn string(&self, key: &str) -> String {
        self.opt_string(key).unwrap_or_default()
    }

    /// Optional string
    pub fn opt_string(&self, key: &str) -> Option<String> {
        self.value(key).and_then(Value::as_str).map(str::to_string)
    }

    /// First non-empty string among `keys`
    pub fn first_string(&self, keys: &[&str]) -> String {
        keys.iter()
            .filter_map(|key| self.opt_string(key))
            .find(|s| !s.is_empty())
            .unwrap_or_default()
    }

    /// Boolean with an explicit default
    pub fn flag(&self, key: &str, default: bool) -> bool {
        self.opt_bool(key).unwrap_or(default)
    }

    /// Optional boolean
    pub fn opt_bool(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(Value::as_bool)
    }

    /// Optional integer; whole-number floats such as `3.0` are accepted
    pub fn opt_i64(&self, key: &str) -> Option<i64> {
        let value = self.value(key)?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|n| n.fract() == 0.0 && n.abs() < i64::MAX as f64)
                .map(|n| n as i64)
        })
    }

    /// List of strings; non-string elements are skipped
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.array(key)
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }

    /// List of raw values
    pub fn values(&self, key: &str) -> Vec<Value> {
        self.array(key).to_vec()
    }

    /// List of mapped entities
    pub fn list<T: FromRaw>(&self, key: &str) -> Vec<T> {
        self.array(key).iter().map(T::from_raw).collect()
    }

    /// Optional nested entity
    pub fn nested<T: FromRaw>(&self, key: &str) -> Option<T> {
        T::from_nested(self.value(key))
    }

    /// Nested object view; empty when absent
    pub fn object(&self, key: &str) -> Fields<'a> {
        Fields {
            map: self.value(key).and_then(Value::as_object),
        }
    }

    fn array(&self, key: &str) -> &'a [Value] {
        self.value(key)
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }
}
