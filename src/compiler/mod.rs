//! Compilation pipeline for filtq
//!
//! Raw query strings pass through segmentation, token parsing, schema
//! resolution and value coercion before an expression tree comes out
//! the far end. Each stage lives in its own module; only the facade
//! and its supporting types are re-exported.
//!
//! # Design Principles
//!
//! - Fail fast: the first violation aborts the whole compile (C1)
//! - All or nothing: no partial tree ever escapes (C2)
//! - Pure: compiling never mutates the compiler or its schema (C3)
//! - Separators are configurable, the rest of the grammar is fixed (C4)

mod builder;
mod coerce;
mod compiler;
mod errors;
mod lexer;
mod options;
mod parser;

pub use coerce::{DATETIME_FORMAT, DATETIME_FORMAT_T, DATE_FORMAT};
pub use compiler::FilterCompiler;
pub use errors::{CompileError, CompileResult};
pub use lexer::ORDER_KEY;
pub use options::{
    CompilerOptions, OptionsError, DEFAULT_GROUP_SEPARATOR, DEFAULT_PREDICATE_SEPARATOR,
};
pub use parser::FIELD_OP_DELIMITER;
