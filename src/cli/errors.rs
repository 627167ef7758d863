//! CLI-specific error types
//!
//! Every failure path of the binary funnels into [`CliError`] so that
//! `main` has exactly one message to print and one exit code to set.

use thiserror::Error;

use crate::compiler::CompileError;
use crate::schema::SchemaError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_errors_keep_their_message() {
        let err = CliError::from(CompileError::unknown_field("ghost"));
        let text = err.to_string();
        assert!(text.starts_with("compile error:"), "{}", text);
        assert!(text.contains("ghost"), "{}", text);
    }
}
