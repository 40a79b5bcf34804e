//! # Tagged Runtime Values
//!
//! [`Value`] is the closed variant that caller-supplied data travels as
//! inside Telos. One variant per base kind plus `Null`, so conformance
//! checking against a declared [`crate::TypeExpr`] is a tag comparison.
//!
//! ## Numeric tagging
//!
//! JSON numbers that fit in an `i64` become [`Value::Integer`]; every
//! other number becomes [`Value::Float`]. The tag assigned here is
//! final — the checker never widens an integer to float or narrows the
//! other way.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::Kind;

/// A runtime value tagged with its base kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent / null. Conforms only under an allow-null policy.
    Null,
    /// UTF-8 text.
    Text(String),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit float.
    Float(f64),
    /// True or false.
    Boolean(bool),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// String-keyed mapping. Keys are kept sorted for stable equality.
    Mapping(BTreeMap<String, Value>),
}

impl Value {
    /// The kind tag of this value, or `None` for `Null`.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Value::Null => None,
            Value::Text(_) => Some(Kind::Text),
            Value::Integer(_) => Some(Kind::Integer),
            Value::Float(_) => Some(Kind::Float),
            Value::Boolean(_) => Some(Kind::Boolean),
            Value::List(_) => Some(Kind::List),
            Value::Mapping(_) => Some(Kind::Mapping),
        }
    }

    /// The kind name for error messages: a kind name or `"null"`.
    pub fn kind_name(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.as_str(),
            None => "null",
        }
    }

    /// Whether this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                // Out-of-range integers and true floats both land here.
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Text(s) => serde_json::Value::String(s),
            Value::Integer(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Mapping(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json: serde_json::Value = self.clone().into();
        write!(f, "{json}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_integer_tags_as_integer() {
        assert_eq!(Value::from(json!(42)), Value::Integer(42));
        assert_eq!(Value::from(json!(-7)), Value::Integer(-7));
    }

    #[test]
    fn json_float_tags_as_float() {
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
        // A whole-number float literal is still an integer in serde_json's
        // model once it fits i64; 1e300 does not.
        assert_eq!(Value::from(json!(1e300)), Value::Float(1e300));
    }

    #[test]
    fn json_compound_conversion() {
        let value = Value::from(json!({"who": "Nikos", "times": [1, 2]}));
        match &value {
            Value::Mapping(entries) => {
                assert_eq!(entries["who"], Value::Text("Nikos".into()));
                assert_eq!(
                    entries["times"],
                    Value::List(vec![Value::Integer(1), Value::Integer(2)])
                );
            }
            other => panic!("expected mapping, got {other:?}"),
        }
    }

    #[test]
    fn roundtrip_through_json() {
        let json = json!({"ok": true, "score": 0.25, "labels": ["a", "b"], "none": null});
        let back: serde_json::Value = Value::from(json.clone()).into();
        assert_eq!(back, json);
    }

    #[test]
    fn kind_tags() {
        assert_eq!(Value::Null.kind(), None);
        assert_eq!(Value::from("x").kind(), Some(Kind::Text));
        assert_eq!(Value::from(1i64).kind(), Some(Kind::Integer));
        assert_eq!(Value::from(1.0).kind(), Some(Kind::Float));
        assert_eq!(Value::from(true).kind(), Some(Kind::Boolean));
        assert_eq!(Value::List(vec![]).kind(), Some(Kind::List));
        assert_eq!(Value::Mapping(BTreeMap::new()).kind(), Some(Kind::Mapping));
        assert_eq!(Value::Null.kind_name(), "null");
    }
}
