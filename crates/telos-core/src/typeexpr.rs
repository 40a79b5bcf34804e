//! # Type Expressions
//!
//! Parser for the restricted type grammar: `BASE` or `BASE[ELEMENT]`.
//!
//! Parsing is two-staged. [`split`] performs the purely syntactic split
//! of a type string into a base name and an optional element source,
//! matching on the first `[` and the last `]` so nested bracket content
//! is captured verbatim rather than choked on. [`TypeExpr::parse`] then
//! applies the legality rules: the base must be one of the six kinds,
//! and an element is only legal on `list` and must itself be scalar.
//! `list[mapping]`, `mapping[text]`, and `list[list[text]]` all split
//! cleanly and are rejected at the legality stage.

use std::fmt;

use crate::error::TypeParseError;
use crate::kind::Kind;

/// A parsed, legality-checked type expression.
///
/// Invariant: `element` is only `Some` when `base == Kind::List`, and
/// the element is always a scalar kind. Construction goes through
/// [`TypeExpr::parse`] or the checked constructors, so the invariant
/// holds for every live value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeExpr {
    base: Kind,
    element: Option<Kind>,
}

/// Split a type string into `(base, element_source)` without any
/// legality checking.
///
/// The element source is taken verbatim between the first `[` and the
/// last `]`; nested brackets survive the split and are left for the
/// legality stage to reject.
///
/// # Errors
///
/// Fails when the string is empty, the bracket counts are unbalanced,
/// or a `[` appears before any base name.
pub fn split(type_str: &str) -> Result<(&str, Option<&str>), TypeParseError> {
    if type_str.is_empty() {
        return Err(TypeParseError::Empty);
    }
    let opens = type_str.matches('[').count();
    let closes = type_str.matches(']').count();
    if opens != closes {
        return Err(TypeParseError::UnmatchedBrackets(type_str.to_string()));
    }

    match type_str.find('[') {
        Some(0) => Err(TypeParseError::MissingBase(type_str.to_string())),
        Some(open) => {
            // Balanced and at least one '[', so rfind(']') cannot miss.
            let close = type_str
                .rfind(']')
                .ok_or_else(|| TypeParseError::UnmatchedBrackets(type_str.to_string()))?;
            // A ']' before the first '[' leaves an empty element source,
            // which the legality stage rejects along with the mangled base.
            let element = if close > open {
                &type_str[open + 1..close]
            } else {
                ""
            };
            Ok((&type_str[..open], Some(element)))
        }
        None => Ok((type_str, None)),
    }
}

impl TypeExpr {
    /// Parse and legality-check a type string.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeParseError`] when the string is syntactically
    /// malformed, names an unknown base kind, puts an element kind on a
    /// non-list base, or uses a non-scalar element kind.
    pub fn parse(type_str: &str) -> Result<Self, TypeParseError> {
        let (base_name, element_source) = split(type_str)?;
        let base = Kind::from_name(base_name)
            .ok_or_else(|| TypeParseError::IllegalBase(base_name.to_string()))?;

        let element = match element_source {
            None => None,
            Some(source) => {
                if base != Kind::List {
                    return Err(TypeParseError::ElementOutsideList {
                        base: base_name.to_string(),
                        element: source.to_string(),
                    });
                }
                let element = Kind::from_name(source)
                    .ok_or_else(|| TypeParseError::IllegalElement(source.to_string()))?;
                if !element.is_scalar() {
                    return Err(TypeParseError::IllegalElement(source.to_string()));
                }
                Some(element)
            }
        };

        Ok(Self { base, element })
    }

    /// A bare base kind with no element.
    pub fn bare(base: Kind) -> Self {
        Self {
            base,
            element: None,
        }
    }

    /// A `list[element]` expression.
    ///
    /// # Errors
    ///
    /// Rejects non-scalar element kinds, preserving the invariant.
    pub fn list_of(element: Kind) -> Result<Self, TypeParseError> {
        if !element.is_scalar() {
            return Err(TypeParseError::IllegalElement(element.as_str().to_string()));
        }
        Ok(Self {
            base: Kind::List,
            element: Some(element),
        })
    }

    /// The base kind.
    pub fn base(&self) -> Kind {
        self.base
    }

    /// The element kind, when this is a generic list.
    pub fn element(&self) -> Option<Kind> {
        self.element
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.element {
            Some(element) => write!(f, "{}[{}]", self.base, element),
            None => write!(f, "{}", self.base),
        }
    }
}
