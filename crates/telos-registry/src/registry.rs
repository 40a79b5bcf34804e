//! # The Registry
//!
//! String-keyed allow-list of capabilities. Keys are dotted references
//! (`"demo.salute"`, `"json.loads"`); everything before the last `.`
//! is the module path, the final segment is the function name. The
//! split only matters for error reporting — lookup is by full key.

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use telos_core::{ArgumentSet, Value};

use crate::capability::Capability;
use crate::error::{ExecutionError, ResolutionError};

/// Allow-listed mapping from dotted reference to capability.
#[derive(Debug, Default)]
pub struct Registry {
    capabilities: BTreeMap<String, Capability>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the built-in capability set.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::builtins::install(&mut registry);
        registry
    }

    /// Register a capability under a dotted reference.
    ///
    /// Replaces any capability previously registered under the same
    /// reference.
    ///
    /// # Errors
    ///
    /// Rejects references without a `.` separator — such a key could
    /// never be resolved.
    pub fn register(
        &mut self,
        reference: impl Into<String>,
        capability: Capability,
    ) -> Result<(), ResolutionError> {
        let reference = reference.into();
        if !reference.contains('.') {
            return Err(ResolutionError::BareReference(reference));
        }
        self.capabilities.insert(reference, capability);
        Ok(())
    }

    /// Resolve a dotted reference to its capability.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::BareReference`] when the reference has no
    ///   `.` separator.
    /// - [`ResolutionError::ModuleNotFound`] when nothing is registered
    ///   under the reference's module path.
    /// - [`ResolutionError::FunctionNotFound`] when the module exists
    ///   but lacks the function.
    pub fn resolve(&self, reference: &str) -> Result<&Capability, ResolutionError> {
        let (module, function) = reference
            .rsplit_once('.')
            .ok_or_else(|| ResolutionError::BareReference(reference.to_string()))?;

        if let Some(capability) = self.capabilities.get(reference) {
            return Ok(capability);
        }

        let module_prefix = format!("{module}.");
        if self
            .capabilities
            .keys()
            .any(|key| key.starts_with(&module_prefix))
        {
            Err(ResolutionError::FunctionNotFound {
                module: module.to_string(),
                function: function.to_string(),
            })
        } else {
            Err(ResolutionError::ModuleNotFound(module.to_string()))
        }
    }

    /// Invoke an already-resolved capability with validated arguments.
    ///
    /// Every failure mode of the capability body — a reported error,
    /// an argument-access error from a mismatched signature, or a
    /// panic — comes back as an [`ExecutionError`] carrying the
    /// original message.
    pub fn invoke(
        &self,
        capability: &Capability,
        args: &ArgumentSet,
    ) -> Result<Value, ExecutionError> {
        match catch_unwind(AssertUnwindSafe(|| capability.call(args))) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(ExecutionError::new(err.to_string())),
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "capability panicked".to_string());
                tracing::warn!(message = %message, "capability panicked during invocation");
                Err(ExecutionError::new(message))
            }
        }
    }

    /// Iterate registered references in key order.
    pub fn references(&self) -> impl Iterator<Item = (&str, &Capability)> {
        self.capabilities
            .iter()
            .map(|(key, capability)| (key.as_str(), capability))
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilityError;

    fn registry() -> Registry {
        Registry::with_builtins()
    }

    #[test]
    fn resolves_registered_reference() {
        assert!(registry().resolve("json.loads").is_ok());
        assert!(registry().resolve("demo.salute").is_ok());
    }

    #[test]
    fn bare_reference_is_rejected() {
        let err = registry().resolve("loads").unwrap_err();
        assert_eq!(err, ResolutionError::BareReference("loads".to_string()));
    }

    #[test]
    fn unknown_module() {
        let err = registry().resolve("nope.loads").unwrap_err();
        assert_eq!(err, ResolutionError::ModuleNotFound("nope".to_string()));
    }

    #[test]
    fn unknown_function_in_known_module() {
        let err = registry().resolve("json.nonexistent").unwrap_err();
        assert_eq!(
            err,
            ResolutionError::FunctionNotFound {
                module: "json".to_string(),
                function: "nonexistent".to_string(),
            }
        );
    }

    #[test]
    fn register_rejects_bare_key() {
        let mut registry = Registry::new();
        let err = registry
            .register("bare", Capability::new("", |_| Ok(Value::Null)))
            .unwrap_err();
        assert!(matches!(err, ResolutionError::BareReference(_)));
    }

    #[test]
    fn invoke_wraps_capability_failure() {
        let mut reg = Registry::new();
        reg.register(
            "demo.fail",
            Capability::new("always fails", |_| {
                Err(CapabilityError::failed("boom"))
            }),
        )
        .unwrap();
        let capability = reg.resolve("demo.fail").unwrap();
        let err = reg.invoke(capability, &ArgumentSet::new()).unwrap_err();
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn invoke_wraps_missing_argument() {
        let reg = registry();
        let capability = reg.resolve("demo.salute").unwrap();
        let err = reg.invoke(capability, &ArgumentSet::new()).unwrap_err();
        assert!(err.message.contains("missing argument 'who'"));
    }

    #[test]
    fn invoke_contains_panics() {
        let mut reg = Registry::new();
        reg.register(
            "demo.panic",
            Capability::new("always panics", |_| panic!("unexpected state")),
        )
        .unwrap();
        let capability = reg.resolve("demo.panic").unwrap();
        let err = reg.invoke(capability, &ArgumentSet::new()).unwrap_err();
        assert!(err.message.contains("unexpected state"));
    }
}
