//! # telos-schema — Function & Parameter Definitions
//!
//! Declarative descriptions of invocable functions and the validation
//! that enforces them. Two distinct validation moments live here:
//!
//! 1. **Load time.** [`Parameter`] and [`FunctionDefinition`] are
//!    constructed through validating constructors (and serde
//!    deserializers that funnel into them). A definition that is
//!    internally inconsistent — illegal type, regex on a non-text
//!    parameter, default of the wrong kind, duplicate options — fails
//!    construction with a [`DefinitionError`]. Invalid definitions
//!    never reach call time.
//!
//! 2. **Call time.** [`validate_input`] checks caller arguments against
//!    an already-validated parameter list and produces a default-filled
//!    [`ArgumentSet`]; [`validate_output`] checks a capability's raw
//!    result against the declared [`ResponseSchema`]. Neither re-runs
//!    the structural checks.
//!
//! [`export`] renders a definition as a JSON-Schema object in the
//! tool-calling shape, for listing endpoints and LLM integration.
//!
//! [`ArgumentSet`]: telos_core::ArgumentSet

pub mod definition;
pub mod error;
pub mod export;
pub mod input;
pub mod output;
pub mod parameter;

pub use definition::{FunctionDefinition, FunctionSpec, ResponseSchema};
pub use error::{DefinitionError, InputError, OutputError};
pub use export::export_definition;
pub use input::validate_input;
pub use output::validate_output;
pub use parameter::Parameter;
