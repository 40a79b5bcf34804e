//! # telos CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use telos_cli::invoke::{run_invoke, InvokeArgs};
use telos_cli::list::{run_list, ListArgs};
use telos_cli::schema::{run_schema, SchemaArgs};
use telos_cli::validate::{run_validate, ValidateArgs};

/// Telos CLI
///
/// Validates, lists, exports, and invokes declaratively defined
/// functions from a directory of JSON definition documents.
#[derive(Parser, Debug)]
#[command(name = "telos", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory of function definition documents.
    #[arg(long, global = true, env = "TELOS_FUNCTIONS_DIR", default_value = "functions")]
    functions_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check every definition document in the functions directory.
    Validate(ValidateArgs),

    /// List the loaded definitions with their references.
    List(ListArgs),

    /// Export one definition in the tool-calling shape.
    Schema(SchemaArgs),

    /// Run one function and print the invocation envelope.
    Invoke(InvokeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &cli.functions_dir),
        Commands::List(args) => run_list(&args, &cli.functions_dir),
        Commands::Schema(args) => run_schema(&args, &cli.functions_dir),
        Commands::Invoke(args) => run_invoke(&args, &cli.functions_dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
