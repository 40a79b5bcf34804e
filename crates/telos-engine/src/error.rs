//! # Engine Error
//!
//! One enum per failure kind in the invocation pipeline, aggregated
//! with `#[from]` conversions so each stage propagates with `?`. The
//! kind→HTTP-status mapping lives here too, keeping the boundary layer
//! mechanical.

use telos_registry::{ExecutionError, ResolutionError};
use telos_schema::{InputError, OutputError};
use thiserror::Error;

use crate::store::StoreError;

/// A failed invocation pipeline stage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// LOOKUP: no definition exists under the requested name.
    #[error("function not found: {0}")]
    UnknownFunction(String),

    /// LOOKUP: the definition store failed or the document is invalid.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// VALIDATE_INPUT: caller arguments don't match the schema.
    #[error(transparent)]
    Input(#[from] InputError),

    /// RESOLVE: the referenced capability cannot be located.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// EXECUTE: the capability failed.
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// VALIDATE_OUTPUT: the result doesn't match the response schema.
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl EngineError {
    /// The envelope status code for this failure.
    ///
    /// Input-schema violations are the caller's fault (400).
    /// Everything else — unknown function, broken definition,
    /// resolution, execution, output-schema — is a server-side
    /// failure (500).
    pub fn status_code(&self) -> u16 {
        match self {
            EngineError::Input(_) => 400,
            EngineError::UnknownFunction(_)
            | EngineError::Store(_)
            | EngineError::Resolution(_)
            | EngineError::Execution(_)
            | EngineError::Output(_) => 500,
        }
    }
}
