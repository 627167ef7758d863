//! Compiler facade.
//!
//! [`FilterCompiler`] owns a validated schema plus separator options and
//! turns raw query strings into expression trees. Construction is the
//! only place schema declarations are checked; after that, `compile` is
//! a pure function of its input and can be called freely from any
//! number of threads through a shared reference.

use crate::ast::ExpressionTree;
use crate::schema::{FilterSchema, SchemaResult};

use super::builder::TreeBuilder;
use super::errors::CompileResult;
use super::lexer;
use super::options::CompilerOptions;

/// Compiles raw filter strings against a fixed schema.
#[derive(Debug, Clone)]
pub struct FilterCompiler {
    schema: FilterSchema,
    options: CompilerOptions,
}

impl FilterCompiler {
    /// Create a compiler with the default `|` and `&` separators.
    ///
    /// Fails if the schema itself is malformed, so that every later
    /// `compile` call runs against known-good declarations.
    pub fn new(schema: FilterSchema) -> SchemaResult<Self> {
        Self::with_options(schema, CompilerOptions::default())
    }

    /// Create a compiler with custom separators.
    pub fn with_options(schema: FilterSchema, options: CompilerOptions) -> SchemaResult<Self> {
        schema.validate_structure()?;
        Ok(FilterCompiler { schema, options })
    }

    /// The schema this compiler validates against.
    pub fn schema(&self) -> &FilterSchema {
        &self.schema
    }

    /// The separator options in effect.
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compile a raw query string into a validated expression tree.
    ///
    /// Empty or whitespace-only input yields an unfiltered tree. Any
    /// violation of the grammar or the schema aborts the whole compile
    /// with the first error encountered.
    pub fn compile(&self, raw: &str) -> CompileResult<ExpressionTree> {
        let segments = lexer::segment(raw, &self.options)?;
        TreeBuilder::new(&self.schema).build(segments)
    }
}
