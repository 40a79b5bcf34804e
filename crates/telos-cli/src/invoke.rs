//! # Invoke Subcommand
//!
//! Runs one function against the built-in capability registry and
//! prints the invocation envelope as JSON. The exit code follows the
//! envelope: 0 for a 200 status, 1 otherwise.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use telos_core::Value;

/// Arguments for the `telos invoke` subcommand.
#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Function name.
    pub name: String,

    /// Arguments as a JSON object, e.g. '{"who": "Ada"}'.
    #[arg(long, default_value = "{}")]
    pub args: String,
}

/// Execute the invoke subcommand.
pub fn run_invoke(args: &InvokeArgs, functions_dir: &Path) -> Result<u8> {
    let raw_args: BTreeMap<String, Value> =
        serde_json::from_str(&args.args).context("--args must be a JSON object")?;

    let orchestrator = crate::orchestrator(functions_dir);
    let envelope = orchestrator.invoke(&args.name, &raw_args);

    println!("{}", serde_json::to_string_pretty(&envelope)?);

    if envelope.is_success() {
        Ok(0)
    } else {
        Ok(1)
    }
}
