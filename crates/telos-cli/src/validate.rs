//! # Validate Subcommand
//!
//! Checks every `.json` document in the functions directory against the
//! definition rules: type grammar, default/type agreement, options,
//! duplicate parameters, and response legality. Prints a per-file
//! verdict and a summary.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use telos_schema::FunctionDefinition;

/// Arguments for the `telos validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every document passes, 1 otherwise.
pub fn run_validate(_args: &ValidateArgs, functions_dir: &Path) -> Result<u8> {
    if !functions_dir.is_dir() {
        println!(
            "WARN: functions directory not found at {}",
            functions_dir.display()
        );
        return Ok(1);
    }

    let mut total = 0usize;
    let mut failed = 0usize;

    let mut paths: Vec<_> = std::fs::read_dir(functions_dir)
        .with_context(|| format!("failed to read {}", functions_dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    for path in &paths {
        total += 1;
        let rel = path.strip_prefix(functions_dir).unwrap_or(path);
        match check_document(path) {
            Ok(name) => println!("  PASS: {} ({name})", rel.display()),
            Err(e) => {
                failed += 1;
                println!("  FAIL: {} — {e:#}", rel.display());
            }
        }
    }

    println!("Definitions: {}/{} passed", total - failed, total);

    if failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Parse and validate one document, returning the declared name.
fn check_document(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let definition: FunctionDefinition =
        serde_json::from_str(&contents).context("definition rejected")?;
    Ok(definition.name().to_string())
}
