//! CLI command implementations
//!
//! Each command loads the schema file, builds a compiler and runs the
//! query through it. Output goes to stdout; all errors bubble up to
//! `main` as [`CliError`](super::errors::CliError).

use std::path::Path;

use crate::compiler::FilterCompiler;
use crate::schema;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Binary entry point: parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Execute one parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Compile { schema, query } => compile(&schema, &query),
        Command::Check { schema, query } => check(&schema, &query),
        Command::Inspect { schema, query } => inspect(&schema, &query),
    }
}

/// Load the schema file and wrap it in a compiler.
fn load_compiler(schema_path: &Path) -> CliResult<FilterCompiler> {
    let schema = schema::load_file(schema_path)?;
    Ok(FilterCompiler::new(schema)?)
}

/// Compile a query and print the expression tree as pretty JSON.
pub fn compile(schema_path: &Path, query: &str) -> CliResult<()> {
    let compiler = load_compiler(schema_path)?;
    let tree = compiler.compile(query)?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

/// Compile a query, printing only `ok` on success.
pub fn check(schema_path: &Path, query: &str) -> CliResult<()> {
    let compiler = load_compiler(schema_path)?;
    compiler.compile(query)?;
    println!("ok");
    Ok(())
}

/// Compile a query and print its human-readable rendering.
pub fn inspect(schema_path: &Path, query: &str) -> CliResult<()> {
    let compiler = load_compiler(schema_path)?;
    let tree = compiler.compile(query)?;
    println!("{}", tree);
    Ok(())
}
