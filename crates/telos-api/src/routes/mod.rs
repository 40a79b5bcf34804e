//! # Route Modules
//!
//! Each module defines an Axum router for one API surface area.
//! Routers are assembled in `lib.rs` into the application.

pub mod execution;
pub mod functions;
