//! # telos-registry — Capability Registry
//!
//! Resolves a function definition's dotted reference string to an
//! executable capability and invokes it with a validated argument set.
//!
//! ## Why a registry and not dynamic resolution
//!
//! Resolving arbitrary dotted paths against the running process would
//! make every reachable symbol invocable by anyone who can write a
//! definition document. The registry inverts that: capabilities are
//! registered explicitly at startup under stable string keys, and a
//! reference resolves only if its key is on the allow-list. The
//! bare-name rule stays as a second fence — a reference without a `.`
//! separator is rejected before any lookup happens.
//!
//! ## Failure containment
//!
//! [`Registry::invoke`] converts every capability failure — including
//! argument-access errors from a mismatched signature, and panics in
//! the capability body — into an [`ExecutionError`] carrying the
//! original message. Nothing crosses this boundary as a panic.

pub mod builtins;
pub mod capability;
pub mod error;
pub mod registry;

pub use capability::{Capability, CapabilityError};
pub use error::{ExecutionError, ResolutionError};
pub use registry::Registry;
