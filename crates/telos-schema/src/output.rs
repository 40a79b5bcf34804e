//! # Output Validation
//!
//! Checks a capability's raw result against the declared
//! [`ResponseSchema`] and shapes it into the named output mapping the
//! envelope carries.
//!
//! The single/multi asymmetry is intentional and must stay: a
//! single-output function returns its value bare (ergonomic for the
//! common case), while a multi-output function returns a positional
//! sequence zipped with the schema entries in declaration order. A
//! positional result whose length differs from the schema arity is an
//! arity error, never a silent truncation.
//!
//! [`ResponseSchema`]: crate::definition::ResponseSchema

use std::collections::BTreeMap;

use telos_core::{conforms, Value};

use crate::definition::ResponseSchema;
use crate::error::OutputError;

/// Validate a raw result against the response schema.
///
/// Nulls are accepted in every output slot — a capability may
/// legitimately produce "no value" for an output it declares.
///
/// # Errors
///
/// Returns [`OutputError::ArityMismatch`] when a multi-output schema
/// receives the wrong number of positional values, or
/// [`OutputError::TypeMismatch`] when any value fails conformance.
pub fn validate_output(
    raw: &Value,
    schema: &ResponseSchema,
) -> Result<BTreeMap<String, Value>, OutputError> {
    let mut shaped = BTreeMap::new();

    if let Some((name, ty)) = schema.single() {
        if !conforms(raw, ty, true) {
            return Err(OutputError::TypeMismatch {
                name: name.to_string(),
                expected: ty.to_string(),
                actual: raw.kind_name().to_string(),
            });
        }
        shaped.insert(name.to_string(), raw.clone());
        return Ok(shaped);
    }

    // Multi-output: the result is positional. A bare value counts as a
    // sequence of length one, which can only ever fail the arity check
    // here since the schema declares at least two outputs.
    let bare = std::slice::from_ref(raw);
    let positional: &[Value] = match raw {
        Value::List(items) => items,
        _ => bare,
    };

    if positional.len() != schema.len() {
        return Err(OutputError::ArityMismatch {
            expected: schema.len(),
            actual: positional.len(),
        });
    }

    for ((name, ty), value) in schema.iter().zip(positional) {
        if !conforms(value, ty, true) {
            return Err(OutputError::TypeMismatch {
                name: name.to_string(),
                expected: ty.to_string(),
                actual: value.kind_name().to_string(),
            });
        }
        shaped.insert(name.to_string(), value.clone());
    }

    Ok(shaped)
}
