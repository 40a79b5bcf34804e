//! # Input Validation
//!
//! Checks a raw caller-supplied argument mapping against an ordered
//! parameter list and produces the default-filled [`ArgumentSet`] that
//! capabilities actually receive.
//!
//! The null-acceptance rule mirrors the definition: a parameter whose
//! declared default is null accepts an explicit null from the caller;
//! a parameter with a concrete default does not.

use std::collections::BTreeMap;

use telos_core::{conforms, ArgumentSet, Value};

use crate::error::InputError;
use crate::parameter::Parameter;

/// Validate raw arguments against the declared parameters.
///
/// - Unknown keys are rejected, regardless of what else is present.
/// - Required parameters must be present and conformant.
/// - Absent optional parameters take their declared default.
/// - Present values are checked with `allow_null` set iff the declared
///   default is null.
///
/// Validation is idempotent: re-validating a successful result against
/// the same parameters succeeds and returns it unchanged.
///
/// # Errors
///
/// Returns the first violation as an [`InputError`].
pub fn validate_input(
    raw: &BTreeMap<String, Value>,
    parameters: &[Parameter],
) -> Result<ArgumentSet, InputError> {
    for key in raw.keys() {
        if !parameters.iter().any(|parameter| parameter.name() == key) {
            return Err(InputError::UnknownArgument(key.clone()));
        }
    }

    let mut validated = ArgumentSet::new();
    for parameter in parameters {
        match raw.get(parameter.name()) {
            None => {
                if parameter.required() {
                    return Err(InputError::MissingRequired(parameter.name().to_string()));
                }
                validated.insert(parameter.name(), parameter.default().clone());
            }
            Some(value) => {
                let allow_null = parameter.default().is_null();
                if !conforms(value, parameter.type_expr(), allow_null) {
                    return Err(InputError::TypeMismatch {
                        name: parameter.name().to_string(),
                        expected: parameter.type_expr().to_string(),
                        actual: value.kind_name().to_string(),
                    });
                }
                validated.insert(parameter.name(), value.clone());
            }
        }
    }

    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParameterSpec;
    use serde_json::json;

    fn parameter(fields: serde_json::Value) -> Parameter {
        Parameter::from_spec(serde_json::from_value::<ParameterSpec>(fields).unwrap()).unwrap()
    }

    fn who_schema() -> Vec<Parameter> {
        vec![parameter(json!({"name": "who", "type": "text"}))]
    }

    fn raw(fields: serde_json::Value) -> BTreeMap<String, Value> {
        serde_json::from_value(fields).unwrap()
    }

    #[test]
    fn accepts_conformant_required_argument() {
        let validated = validate_input(&raw(json!({"who": "Nikos"})), &who_schema()).unwrap();
        assert_eq!(validated.text("who").unwrap(), "Nikos");
        assert_eq!(validated.len(), 1);
    }

    #[test]
    fn rejects_missing_required_argument() {
        let err = validate_input(&raw(json!({})), &who_schema()).unwrap_err();
        assert_eq!(err, InputError::MissingRequired("who".to_string()));
    }

    #[test]
    fn rejects_unknown_argument() {
        let err = validate_input(&raw(json!({"hey": "Nikos"})), &who_schema()).unwrap_err();
        assert_eq!(err, InputError::UnknownArgument("hey".to_string()));
    }

    #[test]
    fn unknown_keys_rejected_even_with_required_present() {
        let err =
            validate_input(&raw(json!({"who": "Nikos", "hey": 1})), &who_schema()).unwrap_err();
        assert_eq!(err, InputError::UnknownArgument("hey".to_string()));
    }

    #[test]
    fn rejects_type_mismatch() {
        let err = validate_input(&raw(json!({"who": 42})), &who_schema()).unwrap_err();
        assert!(matches!(err, InputError::TypeMismatch { ref name, .. } if name == "who"));
    }

    #[test]
    fn absent_optional_takes_default() {
        let schema = vec![parameter(json!({
            "name": "times", "type": "integer", "required": false, "default": 1
        }))];
        let validated = validate_input(&raw(json!({})), &schema).unwrap();
        assert_eq!(validated.integer("times").unwrap(), 1);
    }

    #[test]
    fn absent_optional_without_default_is_null() {
        let schema = vec![parameter(json!({
            "name": "note", "type": "text", "required": false
        }))];
        let validated = validate_input(&raw(json!({})), &schema).unwrap();
        assert!(validated.get("note").unwrap().is_null());
    }

    #[test]
    fn null_accepted_only_when_default_is_null() {
        let nullable = vec![parameter(json!({
            "name": "note", "type": "text", "required": false
        }))];
        assert!(validate_input(&raw(json!({"note": null})), &nullable).is_ok());

        let defaulted = vec![parameter(json!({
            "name": "note", "type": "text", "required": false, "default": "n/a"
        }))];
        let err = validate_input(&raw(json!({"note": null})), &defaulted).unwrap_err();
        assert!(matches!(err, InputError::TypeMismatch { .. }));
    }

    #[test]
    fn list_arguments_checked_per_element() {
        let schema = vec![parameter(json!({"name": "labels", "type": "list[text]"}))];
        assert!(validate_input(&raw(json!({"labels": ["a", "b"]})), &schema).is_ok());
        assert!(validate_input(&raw(json!({"labels": ["a", 2]})), &schema).is_err());
    }

    #[test]
    fn validation_is_idempotent() {
        let schema = vec![
            parameter(json!({"name": "who", "type": "text"})),
            parameter(json!({"name": "times", "type": "integer", "required": false, "default": 2})),
        ];
        let first = validate_input(&raw(json!({"who": "Nikos"})), &schema).unwrap();
        let as_raw: BTreeMap<String, Value> = first.clone().into_iter().collect();
        let second = validate_input(&as_raw, &schema).unwrap();
        assert_eq!(first, second);
    }
}
