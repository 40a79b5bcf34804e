//! # Argument Sets
//!
//! The fully validated, default-filled mapping of parameter name to
//! value that input validation produces and capabilities consume.
//!
//! Typed accessors give capability bodies a way to pull arguments out
//! without panicking: a missing or mistyped argument is an
//! [`ArgumentError`], which the invoker folds into an execution
//! failure. Under a correct definition the validators make these
//! errors unreachable; under a definition whose declared types don't
//! match what the capability body actually reads, they are the
//! mismatched-signature failure mode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::Value;

/// A capability received an argument set that does not fit its signature.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The named argument is absent from the set.
    #[error("missing argument '{0}'")]
    Missing(String),

    /// The named argument is present but carries the wrong kind.
    #[error("argument '{name}' is {actual}, expected {expected}")]
    WrongKind {
        /// Argument name.
        name: String,
        /// Kind the capability asked for.
        expected: &'static str,
        /// Kind actually present.
        actual: &'static str,
    },
}

/// A validated mapping of parameter name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentSet(BTreeMap<String, Value>);

impl ArgumentSet {
    /// An empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous binding of `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Number of bound arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no arguments are bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    fn require(&self, name: &str) -> Result<&Value, ArgumentError> {
        self.get(name)
            .ok_or_else(|| ArgumentError::Missing(name.to_string()))
    }

    fn wrong_kind(name: &str, expected: &'static str, value: &Value) -> ArgumentError {
        ArgumentError::WrongKind {
            name: name.to_string(),
            expected,
            actual: value.kind_name(),
        }
    }

    /// Pull a required text argument.
    pub fn text(&self, name: &str) -> Result<&str, ArgumentError> {
        match self.require(name)? {
            Value::Text(s) => Ok(s),
            other => Err(Self::wrong_kind(name, "text", other)),
        }
    }

    /// Pull a required integer argument.
    pub fn integer(&self, name: &str) -> Result<i64, ArgumentError> {
        match self.require(name)? {
            Value::Integer(i) => Ok(*i),
            other => Err(Self::wrong_kind(name, "integer", other)),
        }
    }

    /// Pull a required float argument.
    pub fn float(&self, name: &str) -> Result<f64, ArgumentError> {
        match self.require(name)? {
            Value::Float(f) => Ok(*f),
            other => Err(Self::wrong_kind(name, "float", other)),
        }
    }

    /// Pull a required boolean argument.
    pub fn boolean(&self, name: &str) -> Result<bool, ArgumentError> {
        match self.require(name)? {
            Value::Boolean(b) => Ok(*b),
            other => Err(Self::wrong_kind(name, "boolean", other)),
        }
    }

    /// Pull a required list argument.
    pub fn list(&self, name: &str) -> Result<&[Value], ArgumentError> {
        match self.require(name)? {
            Value::List(items) => Ok(items),
            other => Err(Self::wrong_kind(name, "list", other)),
        }
    }

    /// Pull a required mapping argument.
    pub fn mapping(&self, name: &str) -> Result<&BTreeMap<String, Value>, ArgumentError> {
        match self.require(name)? {
            Value::Mapping(entries) => Ok(entries),
            other => Err(Self::wrong_kind(name, "mapping", other)),
        }
    }

    /// Pull an optional argument: absent or null both read as `None`.
    pub fn optional(&self, name: &str) -> Option<&Value> {
        match self.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }
}

impl FromIterator<(String, Value)> for ArgumentSet {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ArgumentSet {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArgumentSet {
        let mut args = ArgumentSet::new();
        args.insert("who", Value::from("Nikos"));
        args.insert("times", Value::from(3i64));
        args.insert("note", Value::Null);
        args
    }

    #[test]
    fn typed_access() {
        let args = sample();
        assert_eq!(args.text("who").unwrap(), "Nikos");
        assert_eq!(args.integer("times").unwrap(), 3);
    }

    #[test]
    fn missing_argument() {
        let args = sample();
        assert_eq!(
            args.text("nope"),
            Err(ArgumentError::Missing("nope".to_string()))
        );
    }

    #[test]
    fn wrong_kind_reports_both_sides() {
        let args = sample();
        let err = args.integer("who").unwrap_err();
        assert_eq!(
            err,
            ArgumentError::WrongKind {
                name: "who".to_string(),
                expected: "integer",
                actual: "text",
            }
        );
    }

    #[test]
    fn optional_folds_null() {
        let args = sample();
        assert!(args.optional("note").is_none());
        assert!(args.optional("absent").is_none());
        assert!(args.optional("who").is_some());
    }
}
