//! # List Subcommand
//!
//! Prints the loaded definitions with their parameter counts and
//! capability references.

use std::path::Path;

use anyhow::Result;
use clap::Args;

/// Arguments for the `telos list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print names only, one per line.
    #[arg(long)]
    pub names_only: bool,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, functions_dir: &Path) -> Result<u8> {
    let orchestrator = crate::orchestrator(functions_dir);
    let definitions = orchestrator.list()?;

    if args.names_only {
        for definition in &definitions {
            println!("{}", definition.name());
        }
        return Ok(0);
    }

    if definitions.is_empty() {
        println!("No definitions in {}", functions_dir.display());
        return Ok(0);
    }

    for definition in &definitions {
        println!(
            "{}  {} parameter(s)  -> {}",
            definition.name(),
            definition.parameters().len(),
            definition.reference()
        );
        if !definition.description().is_empty() {
            println!("    {}", definition.description());
        }
    }
    println!("{} definition(s)", definitions.len());

    Ok(0)
}
