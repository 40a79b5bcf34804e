//! # telos-core — Foundational Types for Telos
//!
//! This crate is the leaf of the Telos workspace DAG. It defines the
//! restricted type grammar that function definitions are written in, the
//! closed tagged value that caller-supplied data is carried as, and the
//! conformance check that joins the two. Every other crate depends on
//! `telos-core`; it depends on nothing internal.
//!
//! ## The type grammar
//!
//! A type string is either a bare base kind (`"text"`, `"integer"`,
//! `"float"`, `"boolean"`, `"list"`, `"mapping"`) or a single-level
//! generic `list[<base>]` where the element is one of the four scalar
//! kinds. That is the whole language; nested generics, custom object
//! types, and unions are rejected. See [`TypeExpr`].
//!
//! ## The tagged value
//!
//! [`Value`] is a closed variant mirroring the six base kinds plus
//! `Null`. Conformance checking is a tag comparison, never reflection.
//! Values convert losslessly to and from `serde_json::Value`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `telos-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`.

pub mod args;
pub mod check;
pub mod error;
pub mod kind;
pub mod typeexpr;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use args::{ArgumentError, ArgumentSet};
pub use check::conforms;
pub use error::TypeParseError;
pub use kind::Kind;
pub use typeexpr::TypeExpr;
pub use value::Value;
