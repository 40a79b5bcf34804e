//! # Type Grammar Errors
//!
//! Failures raised while parsing or legality-checking a type string.
//! These surface at definition-load time only — runtime conformance
//! checking ([`crate::check::conforms`]) is total and never errors.

use thiserror::Error;

/// Error parsing or legality-checking a type string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeParseError {
    /// The type string was empty.
    #[error("empty type string")]
    Empty,

    /// The counts of `[` and `]` did not match.
    #[error("unmatched brackets in type string '{0}'")]
    UnmatchedBrackets(String),

    /// A `[` appeared before any base name.
    #[error("type string '{0}' has no base name before '['")]
    MissingBase(String),

    /// The base name is not one of the six base kinds.
    #[error("unknown base kind '{0}'; allowed kinds are: text, integer, float, boolean, list, mapping")]
    IllegalBase(String),

    /// An element kind was declared on a non-list base.
    #[error("base kind '{base}' does not take an element kind (got '{base}[{element}]')")]
    ElementOutsideList {
        /// The declared base kind name.
        base: String,
        /// The declared element source string.
        element: String,
    },

    /// The element kind of a list is not one of the four scalar kinds.
    #[error("element kind '{0}' is not allowed for 'list'; allowed element kinds are: text, integer, float, boolean")]
    IllegalElement(String),
}
