//! # telos-engine — Invocation Engine
//!
//! Composes the schema validators and the capability registry into the
//! single entry point external boundaries call: load a definition,
//! validate input, resolve, execute, validate output, shape the
//! envelope. One run per request, no state carried across runs.
//!
//! ## Pieces
//!
//! - [`store`] — the [`DefinitionStore`] abstraction plus the
//!   directory-backed and in-memory implementations.
//! - [`cache`] — an injected read-through cache over any store.
//!   Definitions are pure and idempotent to load, so racing misses may
//!   recompute and overwrite freely.
//! - [`orchestrator`] — the LOOKUP → VALIDATE_INPUT → RESOLVE →
//!   EXECUTE → VALIDATE_OUTPUT pipeline and the uniform
//!   [`Invocation`] envelope.
//!
//! ## Concurrency
//!
//! The engine holds no mutable state of its own beyond the cache,
//! which is lock-guarded and tolerant of overwrite races. Everything
//! else is read-only after load, so concurrent invocations are
//! data-race-free by construction. No timeouts are imposed here —
//! cancellation of long-running capabilities belongs to the boundary.
//!
//! [`DefinitionStore`]: store::DefinitionStore
//! [`Invocation`]: orchestrator::Invocation

pub mod cache;
pub mod error;
pub mod orchestrator;
pub mod store;

pub use cache::DefinitionCache;
pub use error::EngineError;
pub use orchestrator::{Invocation, Orchestrator, StatusLine};
pub use store::{DefinitionStore, DirStore, MemoryStore, StoreError};
