//! # Parameter Definitions
//!
//! A [`Parameter`] describes one argument of an invocable function:
//! its name, declared type, whether it is required, an optional
//! default, and at most one value constraint (a regex for text
//! parameters, or an enumerated options list).
//!
//! Construction validates. The only ways to obtain a `Parameter` are
//! [`Parameter::from_spec`] and the serde deserializer (which funnels
//! through it), so every live `Parameter` has passed the structural
//! checks. Call-time validation trusts this and never re-checks.

use regex::Regex;
use serde::{Deserialize, Serialize};
use telos_core::{Kind, TypeExpr, Value};

use crate::error::DefinitionError;

fn default_true() -> bool {
    true
}

/// The raw document shape of a parameter, before validation.
///
/// This is what definition documents actually contain. It carries no
/// guarantees; feed it to [`Parameter::from_spec`] to get a validated
/// parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name, unique within a function.
    pub name: String,
    /// Human-readable description, surfaced in exported schemas.
    #[serde(default)]
    pub description: String,
    /// Type string in the restricted grammar, e.g. `"text"` or `"list[integer]"`.
    #[serde(rename = "type")]
    pub type_source: String,
    /// Whether the caller must supply this parameter. Defaults to true.
    #[serde(default = "default_true")]
    pub required: bool,
    /// Default used when an optional parameter is absent. May be null.
    #[serde(default)]
    pub default: Value,
    /// Regex constraint. Text parameters only; exclusive with `options`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// Enumerated allowed values. Exclusive with `regex`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<Value>>,
}

/// A validated parameter definition. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ParameterSpec", into = "ParameterSpec")]
pub struct Parameter {
    name: String,
    description: String,
    ty: TypeExpr,
    required: bool,
    default: Value,
    regex: Option<String>,
    options: Option<Vec<Value>>,
}

impl Parameter {
    /// Validate a raw spec into a parameter.
    ///
    /// Checks, in order: the type parses and is legal; `regex` and
    /// `options` are not both set; `regex` only appears on text
    /// parameters and compiles; a non-null default on an optional
    /// parameter matches the base kind; options are non-empty,
    /// pairwise-unique, and each of the base kind.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`DefinitionError`].
    pub fn from_spec(spec: ParameterSpec) -> Result<Self, DefinitionError> {
        let ParameterSpec {
            name,
            description,
            type_source,
            required,
            default,
            regex,
            options,
        } = spec;

        let ty = TypeExpr::parse(&type_source).map_err(|source| DefinitionError::IllegalType {
            name: name.clone(),
            source,
        })?;

        if regex.is_some() && options.is_some() {
            return Err(DefinitionError::RegexOptionsExclusive { name });
        }

        if let Some(pattern) = &regex {
            if ty.base() != Kind::Text {
                return Err(DefinitionError::RegexRequiresText {
                    declared: ty.base().as_str().to_string(),
                    name,
                });
            }
            Regex::new(pattern).map_err(|err| DefinitionError::InvalidRegex {
                name: name.clone(),
                reason: err.to_string(),
            })?;
        }

        if !required && !default.is_null() && default.kind() != Some(ty.base()) {
            return Err(DefinitionError::DefaultTypeMismatch {
                expected: ty.base().as_str().to_string(),
                actual: default.kind_name().to_string(),
                name,
            });
        }

        if let Some(values) = &options {
            if values.is_empty() {
                return Err(DefinitionError::EmptyOptions { name });
            }
            for (index, option) in values.iter().enumerate() {
                if values[..index].contains(option) {
                    return Err(DefinitionError::DuplicateOption { name });
                }
                if option.kind() != Some(ty.base()) {
                    return Err(DefinitionError::OptionTypeMismatch {
                        option: option.to_string(),
                        expected: ty.base().as_str().to_string(),
                        actual: option.kind_name().to_string(),
                        name,
                    });
                }
            }
        }

        Ok(Self {
            name,
            description,
            ty,
            required,
            default,
            regex,
            options,
        })
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The parsed, legality-checked type.
    pub fn type_expr(&self) -> &TypeExpr {
        &self.ty
    }

    /// Whether the caller must supply this parameter.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The declared default. Null when none was declared.
    pub fn default(&self) -> &Value {
        &self.default
    }

    /// The regex constraint, if any.
    pub fn regex(&self) -> Option<&str> {
        self.regex.as_deref()
    }

    /// The enumerated options, if any.
    pub fn options(&self) -> Option<&[Value]> {
        self.options.as_deref()
    }
}

impl TryFrom<ParameterSpec> for Parameter {
    type Error = DefinitionError;

    fn try_from(spec: ParameterSpec) -> Result<Self, Self::Error> {
        Self::from_spec(spec)
    }
}

impl From<Parameter> for ParameterSpec {
    fn from(parameter: Parameter) -> Self {
        ParameterSpec {
            name: parameter.name,
            description: parameter.description,
            type_source: parameter.ty.to_string(),
            required: parameter.required,
            default: parameter.default,
            regex: parameter.regex,
            options: parameter.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(fields: serde_json::Value) -> ParameterSpec {
        serde_json::from_value(fields).unwrap()
    }

    #[test]
    fn minimal_text_parameter() {
        let parameter = Parameter::from_spec(spec(json!({
            "name": "who",
            "description": "Name of whom to salute.",
            "type": "text",
        })))
        .unwrap();
        assert_eq!(parameter.name(), "who");
        assert!(parameter.required());
        assert!(parameter.default().is_null());
        assert_eq!(parameter.type_expr().base(), Kind::Text);
    }

    #[test]
    fn illegal_type_fails_at_construction() {
        let err = Parameter::from_spec(spec(json!({
            "name": "rows",
            "type": "list[mapping]",
        })))
        .unwrap_err();
        assert!(matches!(err, DefinitionError::IllegalType { .. }));
    }

    #[test]
    fn regex_and_options_are_exclusive() {
        let err = Parameter::from_spec(spec(json!({
            "name": "mode",
            "type": "text",
            "regex": ".*",
            "options": ["fast", "slow"],
        })))
        .unwrap_err();
        assert!(matches!(err, DefinitionError::RegexOptionsExclusive { .. }));
    }

    #[test]
    fn regex_requires_text() {
        let err = Parameter::from_spec(spec(json!({
            "name": "count",
            "type": "integer",
            "regex": "[0-9]+",
        })))
        .unwrap_err();
        assert!(matches!(err, DefinitionError::RegexRequiresText { .. }));
    }

    #[test]
    fn regex_must_compile() {
        let err = Parameter::from_spec(spec(json!({
            "name": "mode",
            "type": "text",
            "regex": "[unclosed",
        })))
        .unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidRegex { .. }));
    }

    #[test]
    fn default_kind_must_match() {
        let err = Parameter::from_spec(spec(json!({
            "name": "count",
            "type": "integer",
            "required": false,
            "default": "ten",
        })))
        .unwrap_err();
        assert!(matches!(err, DefinitionError::DefaultTypeMismatch { .. }));

        assert!(Parameter::from_spec(spec(json!({
            "name": "count",
            "type": "integer",
            "required": false,
            "default": 10,
        })))
        .is_ok());
    }

    #[test]
    fn null_default_is_always_fine() {
        let parameter = Parameter::from_spec(spec(json!({
            "name": "note",
            "type": "text",
            "required": false,
        })))
        .unwrap();
        assert!(parameter.default().is_null());
    }

    #[test]
    fn options_must_be_non_empty() {
        let err = Parameter::from_spec(spec(json!({
            "name": "mode",
            "type": "text",
            "options": [],
        })))
        .unwrap_err();
        assert!(matches!(err, DefinitionError::EmptyOptions { .. }));
    }

    #[test]
    fn options_must_be_unique() {
        let err = Parameter::from_spec(spec(json!({
            "name": "mode",
            "type": "text",
            "options": ["fast", "fast"],
        })))
        .unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateOption { .. }));
    }

    #[test]
    fn options_must_match_base_kind() {
        let err = Parameter::from_spec(spec(json!({
            "name": "mode",
            "type": "text",
            "options": ["fast", 3],
        })))
        .unwrap_err();
        assert!(matches!(err, DefinitionError::OptionTypeMismatch { .. }));
    }

    #[test]
    fn deserializer_funnels_through_validation() {
        let err = serde_json::from_value::<Parameter>(json!({
            "name": "rows",
            "type": "list[mapping]",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("illegal type"));
    }

    #[test]
    fn serialization_preserves_document_shape() {
        let parameter: Parameter = serde_json::from_value(json!({
            "name": "mode",
            "description": "Run mode.",
            "type": "text",
            "required": false,
            "default": "fast",
            "options": ["fast", "slow"],
        }))
        .unwrap();
        let round = serde_json::to_value(&parameter).unwrap();
        assert_eq!(round["type"], "text");
        assert_eq!(round["options"], json!(["fast", "slow"]));
        assert_eq!(round["default"], "fast");
    }
}
