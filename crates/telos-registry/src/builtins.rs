//! # Built-in Capabilities
//!
//! The default allow-list installed by [`Registry::with_builtins`].
//! Small, dependency-free functions that exercise every shape the
//! validators know about: single and multi output, scalar and list
//! arguments, optional parameters, and domain failures.
//!
//! [`Registry::with_builtins`]: crate::Registry::with_builtins

use telos_core::Value;

use crate::capability::{Capability, CapabilityError};
use crate::registry::Registry;

/// Install the built-in capability set into `registry`.
pub fn install(registry: &mut Registry) {
    // register() only fails on bare keys; every key here is dotted.
    let entries: Vec<(&str, Capability)> = vec![
        (
            "demo.salute",
            Capability::new("Salute someone. o7", |args| {
                let who = args.text("who")?;
                Ok(Value::Text(format!("Hello, {who}! o7")))
            }),
        ),
        (
            "text.word_count",
            Capability::new("Count whitespace-separated words.", |args| {
                let text = args.text("text")?;
                Ok(Value::Integer(text.split_whitespace().count() as i64))
            }),
        ),
        (
            "text.stats",
            Capability::new("Character and word counts, positionally.", |args| {
                let text = args.text("text")?;
                Ok(Value::List(vec![
                    Value::Integer(text.chars().count() as i64),
                    Value::Integer(text.split_whitespace().count() as i64),
                ]))
            }),
        ),
        (
            "json.loads",
            Capability::new("Parse a JSON document.", |args| {
                let document = args.text("document")?;
                let parsed: serde_json::Value = serde_json::from_str(document)
                    .map_err(|err| CapabilityError::failed(err.to_string()))?;
                Ok(Value::from(parsed))
            }),
        ),
        (
            "json.dumps",
            Capability::new("Serialize a mapping as a JSON document.", |args| {
                let value = Value::Mapping(args.mapping("value")?.clone());
                let json: serde_json::Value = value.into();
                serde_json::to_string(&json)
                    .map(Value::Text)
                    .map_err(|err| CapabilityError::failed(err.to_string()))
            }),
        ),
        (
            "math.sum",
            Capability::new("Sum a list of integers.", |args| {
                let mut total: i64 = 0;
                for item in args.list("values")? {
                    match item {
                        Value::Integer(i) => {
                            total = total.checked_add(*i).ok_or_else(|| {
                                CapabilityError::failed("integer overflow in sum")
                            })?;
                        }
                        other => {
                            return Err(CapabilityError::failed(format!(
                                "values must be integers, got {}",
                                other.kind_name()
                            )))
                        }
                    }
                }
                Ok(Value::Integer(total))
            }),
        ),
        (
            "math.clamp",
            Capability::new("Clamp a float into [low, high].", |args| {
                let value = args.float("value")?;
                let low = args.float("low")?;
                let high = args.float("high")?;
                if low > high {
                    return Err(CapabilityError::failed(format!(
                        "empty range: low {low} exceeds high {high}"
                    )));
                }
                Ok(Value::Float(value.clamp(low, high)))
            }),
        ),
    ];

    for (reference, capability) in entries {
        let registered = registry.register(reference, capability);
        debug_assert!(registered.is_ok(), "builtin reference must be dotted");
    }
}
