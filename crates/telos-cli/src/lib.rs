//! # telos-cli — CLI Tool for Telos
//!
//! Provides the `telos` command-line interface for working with a
//! directory of function definition documents.
//!
//! ## Subcommands
//!
//! - `telos validate` — Check every document in the functions directory.
//! - `telos list` — List the loaded definitions.
//! - `telos schema` — Export one definition in the tool-calling shape.
//! - `telos invoke` — Run one function against the built-in registry.
//!
//! ```bash
//! telos validate
//! telos list
//! telos schema salute
//! telos invoke salute --args '{"who": "Ada"}'
//! ```

pub mod invoke;
pub mod list;
pub mod schema;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use telos_engine::{DirStore, Orchestrator};
use telos_registry::Registry;

/// Build an orchestrator over a functions directory and the built-in
/// capability registry.
pub fn orchestrator(functions_dir: &Path) -> Orchestrator {
    let store = Arc::new(DirStore::new(functions_dir));
    let registry = Arc::new(Registry::with_builtins());
    Orchestrator::new(store, registry)
}
