//! # Schema Errors
//!
//! Three error families with three distinct audiences:
//!
//! - [`DefinitionError`] — the definition author got the document
//!   wrong. Raised at load time only.
//! - [`InputError`] — the caller supplied arguments that don't match
//!   the declared schema. Maps to a client error at the boundary.
//! - [`OutputError`] — the capability returned something that doesn't
//!   match its declared response schema. Maps to a server error.

use telos_core::TypeParseError;
use thiserror::Error;

/// A parameter or function definition is internally inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// The declared type string failed to parse or is illegal.
    #[error("parameter '{name}' has an illegal type: {source}")]
    IllegalType {
        /// Parameter name.
        name: String,
        /// Underlying grammar error.
        #[source]
        source: TypeParseError,
    },

    /// Both `regex` and `options` were declared.
    #[error("parameter '{name}': regex and options are mutually exclusive")]
    RegexOptionsExclusive {
        /// Parameter name.
        name: String,
    },

    /// A regex was declared on a non-text parameter.
    #[error("parameter '{name}': regex requires the text type, not '{declared}'")]
    RegexRequiresText {
        /// Parameter name.
        name: String,
        /// The declared base kind name.
        declared: String,
    },

    /// The declared regex does not compile.
    #[error("parameter '{name}': invalid regex: {reason}")]
    InvalidRegex {
        /// Parameter name.
        name: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// A non-null default does not match the declared base kind.
    #[error("parameter '{name}': default is {actual}, expected {expected}")]
    DefaultTypeMismatch {
        /// Parameter name.
        name: String,
        /// Declared base kind name.
        expected: String,
        /// Kind of the supplied default.
        actual: String,
    },

    /// An empty options list was declared.
    #[error("parameter '{name}': options must be a non-empty list")]
    EmptyOptions {
        /// Parameter name.
        name: String,
    },

    /// The options list contains structurally equal values.
    #[error("parameter '{name}': options must be pairwise unique")]
    DuplicateOption {
        /// Parameter name.
        name: String,
    },

    /// An option value does not match the declared base kind.
    #[error("parameter '{name}': option {option} is {actual}, expected {expected}")]
    OptionTypeMismatch {
        /// Parameter name.
        name: String,
        /// The offending option, rendered as JSON.
        option: String,
        /// Declared base kind name.
        expected: String,
        /// Kind of the offending option.
        actual: String,
    },

    /// Two parameters share a name within one function.
    #[error("function '{function}': duplicate parameter '{name}'")]
    DuplicateParameter {
        /// Function name.
        function: String,
        /// The repeated parameter name.
        name: String,
    },

    /// A response schema entry declares an illegal type.
    #[error("function '{function}': response '{name}' has an illegal type: {source}")]
    IllegalResponseType {
        /// Function name.
        function: String,
        /// Response entry name.
        name: String,
        /// Underlying grammar error.
        #[source]
        source: TypeParseError,
    },

    /// The response schema is empty.
    #[error("function '{function}': response schema must declare at least one output")]
    EmptyResponse {
        /// Function name.
        function: String,
    },
}

/// Caller-supplied arguments do not match the declared schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// An argument key is absent from the parameter name set.
    #[error("unknown argument '{0}': not found in schema")]
    UnknownArgument(String),

    /// A required parameter was not provided.
    #[error("missing required argument '{0}'")]
    MissingRequired(String),

    /// A provided value does not conform to the declared type.
    #[error("type mismatch for '{name}': got {actual}, expected {expected}")]
    TypeMismatch {
        /// Parameter name.
        name: String,
        /// Declared type expression.
        expected: String,
        /// Kind of the supplied value.
        actual: String,
    },
}

/// A capability's result does not match the declared response schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutputError {
    /// A positional result's length differs from the schema arity.
    #[error("result carries {actual} output values, schema declares {expected}")]
    ArityMismatch {
        /// Number of entries in the response schema.
        expected: usize,
        /// Number of values in the raw result.
        actual: usize,
    },

    /// An output value does not conform to its declared type.
    #[error("output '{name}' is {actual}, expected {expected}")]
    TypeMismatch {
        /// Output name.
        name: String,
        /// Declared type expression.
        expected: String,
        /// Kind of the produced value.
        actual: String,
    },
}
