//! # Capabilities
//!
//! A [`Capability`] is one invocable unit of behavior: a closure from
//! a validated [`ArgumentSet`] to a raw result [`Value`]. Capability
//! bodies report failure through [`CapabilityError`]; the `?` operator
//! works directly on the typed accessors of `ArgumentSet`.

use std::fmt;
use std::sync::Arc;

use telos_core::{ArgumentError, ArgumentSet, Value};
use thiserror::Error;

/// Failure inside a capability body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The argument set does not fit the capability's signature.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// Domain failure reported by the capability itself.
    #[error("{0}")]
    Failed(String),
}

impl CapabilityError {
    /// A domain failure with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

type CapabilityFn = dyn Fn(&ArgumentSet) -> Result<Value, CapabilityError> + Send + Sync;

/// An invocable capability with a short description for listings.
#[derive(Clone)]
pub struct Capability {
    description: &'static str,
    body: Arc<CapabilityFn>,
}

impl Capability {
    /// Wrap a closure as a capability.
    pub fn new<F>(description: &'static str, body: F) -> Self
    where
        F: Fn(&ArgumentSet) -> Result<Value, CapabilityError> + Send + Sync + 'static,
    {
        Self {
            description,
            body: Arc::new(body),
        }
    }

    /// One-line description of what the capability does.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Run the capability body directly, without panic containment.
    /// Use [`crate::Registry::invoke`] at the invocation boundary.
    pub fn call(&self, args: &ArgumentSet) -> Result<Value, CapabilityError> {
        (self.body)(args)
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
