//! # Base Kinds
//!
//! The six primitive kinds the restricted type language understands.
//! One enum, six variants, exhaustive `match` everywhere — adding a
//! kind forces every consumer to handle it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A base kind in the restricted type language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// UTF-8 text.
    Text,
    /// Signed 64-bit integer. Never implicitly widened to `Float`.
    Integer,
    /// 64-bit floating point. Never accepts an `Integer` value.
    Float,
    /// True or false.
    Boolean,
    /// Ordered sequence. May carry a scalar element kind (`list[text]`).
    List,
    /// String-keyed mapping. Takes no element kind.
    Mapping,
}

impl Kind {
    /// All six base kinds, in declaration order.
    pub const ALL: [Kind; 6] = [
        Kind::Text,
        Kind::Integer,
        Kind::Float,
        Kind::Boolean,
        Kind::List,
        Kind::Mapping,
    ];

    /// The four kinds legal as a list's element kind.
    pub const SCALAR: [Kind; 4] = [Kind::Text, Kind::Integer, Kind::Float, Kind::Boolean];

    /// Parse a kind name. Returns `None` for anything outside the six names.
    pub fn from_name(name: &str) -> Option<Kind> {
        match name {
            "text" => Some(Kind::Text),
            "integer" => Some(Kind::Integer),
            "float" => Some(Kind::Float),
            "boolean" => Some(Kind::Boolean),
            "list" => Some(Kind::List),
            "mapping" => Some(Kind::Mapping),
            _ => None,
        }
    }

    /// The canonical name of this kind in type strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
            Kind::List => "list",
            Kind::Mapping => "mapping",
        }
    }

    /// Whether this kind may appear as a list's element kind.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Kind::Text | Kind::Integer | Kind::Float | Kind::Boolean
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_roundtrip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(Kind::from_name("str"), None);
        assert_eq!(Kind::from_name("dict"), None);
        assert_eq!(Kind::from_name("Text"), None);
        assert_eq!(Kind::from_name(""), None);
    }

    #[test]
    fn scalar_kinds() {
        assert!(Kind::Text.is_scalar());
        assert!(Kind::Integer.is_scalar());
        assert!(Kind::Float.is_scalar());
        assert!(Kind::Boolean.is_scalar());
        assert!(!Kind::List.is_scalar());
        assert!(!Kind::Mapping.is_scalar());
    }
}
