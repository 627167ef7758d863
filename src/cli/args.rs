//! CLI argument definitions using clap
//!
//! Commands:
//! - filtq compile --schema <path> <query>
//! - filtq check --schema <path> <query>
//! - filtq inspect --schema <path> <query>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// filtq - A strict, schema-validated filter query compiler
#[derive(Parser, Debug)]
#[command(name = "filtq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a query and print the expression tree as JSON
    Compile {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,

        /// Raw filter query string
        query: String,
    },

    /// Compile a query and report only success or failure
    Check {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,

        /// Raw filter query string
        query: String,
    },

    /// Compile a query and print a human-readable rendering
    Inspect {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,

        /// Raw filter query string
        query: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
