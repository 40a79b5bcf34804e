//! # Invocation Orchestrator
//!
//! One run per request:
//!
//! ```text
//! LOOKUP → VALIDATE_INPUT → RESOLVE → EXECUTE → VALIDATE_OUTPUT → DONE
//! ```
//!
//! Any stage's failure short-circuits the pipeline. [`Orchestrator::invoke`]
//! never returns an error — every failure is folded into the uniform
//! [`Invocation`] envelope with the status code owned by
//! [`EngineError::status_code`]. The typed path
//! [`Orchestrator::try_invoke`] is for embedders that want the error
//! kinds themselves.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use telos_core::Value;
use telos_registry::Registry;
use telos_schema::{validate_input, validate_output, FunctionDefinition};

use crate::cache::DefinitionCache;
use crate::error::EngineError;
use crate::store::DefinitionStore;

/// Status line of the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    /// 200 on success, 400 for input violations, 500 otherwise.
    pub code: u16,
    /// `"Success"` or the failure message.
    pub message: String,
}

/// The uniform response envelope, one per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    /// Outcome status.
    pub status: StatusLine,
    /// Named outputs on success; null on any failure.
    pub data: Option<BTreeMap<String, Value>>,
}

impl Invocation {
    fn success(data: BTreeMap<String, Value>) -> Self {
        Self {
            status: StatusLine {
                code: 200,
                message: "Success".to_string(),
            },
            data: Some(data),
        }
    }

    fn failure(err: &EngineError) -> Self {
        Self {
            status: StatusLine {
                code: err.status_code(),
                message: err.to_string(),
            },
            data: None,
        }
    }

    /// Whether this invocation succeeded.
    pub fn is_success(&self) -> bool {
        self.status.code == 200
    }
}

/// Composes store, cache, validators, and registry into the invocation
/// pipeline. Holds no per-request state; safe to share across callers.
pub struct Orchestrator {
    store: Arc<dyn DefinitionStore>,
    registry: Arc<Registry>,
    cache: DefinitionCache,
}

impl Orchestrator {
    /// Build an orchestrator over a definition store and a registry.
    pub fn new(store: Arc<dyn DefinitionStore>, registry: Arc<Registry>) -> Self {
        Self {
            store,
            registry,
            cache: DefinitionCache::new(),
        }
    }

    /// The capability registry this orchestrator resolves against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Look up a definition by name, through the cache.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownFunction`] when no definition exists, or a
    /// store error when the document cannot be loaded.
    pub fn definition(&self, name: &str) -> Result<Arc<FunctionDefinition>, EngineError> {
        self.cache
            .get_or_load(name, self.store.as_ref())?
            .ok_or_else(|| EngineError::UnknownFunction(name.to_string()))
    }

    /// All definitions in the store, bypassing the cache.
    pub fn list(&self) -> Result<Vec<FunctionDefinition>, EngineError> {
        self.store.list().map_err(EngineError::from)
    }

    /// Drop a cached definition so the next lookup re-reads the store.
    pub fn invalidate(&self, name: &str) {
        self.cache.invalidate(name);
    }

    /// Run the pipeline, returning typed errors.
    pub fn try_invoke(
        &self,
        name: &str,
        raw_args: &BTreeMap<String, Value>,
    ) -> Result<BTreeMap<String, Value>, EngineError> {
        let definition = self.definition(name)?;

        let args = validate_input(raw_args, definition.parameters()).map_err(|err| {
            tracing::warn!(function = name, error = %err, "input validation failed");
            err
        })?;

        let capability = self.registry.resolve(definition.reference()).map_err(|err| {
            tracing::error!(
                function = name,
                reference = definition.reference(),
                error = %err,
                "capability resolution failed"
            );
            err
        })?;

        let raw_result = self.registry.invoke(capability, &args).map_err(|err| {
            tracing::error!(function = name, error = %err, "execution failed");
            err
        })?;

        let shaped = validate_output(&raw_result, definition.response()).map_err(|err| {
            tracing::error!(function = name, error = %err, "output validation failed");
            err
        })?;

        Ok(shaped)
    }

    /// Run the pipeline and fold the outcome into the envelope.
    pub fn invoke(&self, name: &str, raw_args: &BTreeMap<String, Value>) -> Invocation {
        match self.try_invoke(name, raw_args) {
            Ok(data) => Invocation::success(data),
            Err(err) => Invocation::failure(&err),
        }
    }
}
