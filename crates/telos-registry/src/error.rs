//! # Resolution & Execution Errors
//!
//! [`ResolutionError`] — the reference cannot be turned into a
//! capability. [`ExecutionError`] — the capability ran and failed.
//! Both are recoverable; the orchestrator folds them into the failure
//! envelope.

use thiserror::Error;

/// The referenced capability cannot be located.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The reference has no `.` separator. Bare names are forbidden.
    #[error("reference '{0}' has no module separator; bare names cannot be invoked")]
    BareReference(String),

    /// No capability is registered under the reference's module path.
    #[error("module '{0}' is not registered")]
    ModuleNotFound(String),

    /// The module exists but the function name is absent from it.
    #[error("function '{function}' is not registered in module '{module}'")]
    FunctionNotFound {
        /// Module path portion of the reference.
        module: String,
        /// Function name portion of the reference.
        function: String,
    },
}

/// The capability itself failed during execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("function execution failed: {message}")]
pub struct ExecutionError {
    /// The original failure message from the capability body.
    pub message: String,
}

impl ExecutionError {
    /// Wrap a failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
