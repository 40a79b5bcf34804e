//! # Schema Subcommand
//!
//! Exports one definition in the tool-calling shape, or its declared
//! response schema.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use telos_schema::export_definition;

/// Arguments for the `telos schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Function name.
    pub name: String,

    /// Print the declared response schema instead of the parameters.
    #[arg(long)]
    pub response: bool,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs, functions_dir: &Path) -> Result<u8> {
    let orchestrator = crate::orchestrator(functions_dir);
    let definition = orchestrator.definition(&args.name)?;

    let document = if args.response {
        serde_json::to_value(definition.response().to_raw())?
    } else {
        export_definition(&definition)
    };

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(0)
}
