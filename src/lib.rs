//! filtq - A strict, schema-validated filter query compiler
//!
//! Compiles compact URL-safe filter strings such as
//! `salary_from__gte=60&category__in=IT,Finance|is_active__eq=true&order_by=-id`
//! into a typed, backend-agnostic expression tree. Every field, operator
//! and value is validated against a caller-declared schema; nothing
//! undeclared ever reaches the output.
//!
//! ```
//! use filtq::compiler::FilterCompiler;
//! use filtq::operators::Operator;
//! use filtq::schema::{FieldRule, FilterSchema};
//!
//! let schema = FilterSchema::new()
//!     .field("id", FieldRule::integer(vec![Operator::Eq, Operator::In]))
//!     .field("title", FieldRule::text(vec![Operator::StartsWith]));
//!
//! let compiler = FilterCompiler::new(schema).unwrap();
//! let tree = compiler.compile("title__startswith=Dev|id__in_=3,7").unwrap();
//! assert_eq!(tree.groups().len(), 2);
//! ```

pub mod ast;
pub mod cli;
pub mod compiler;
pub mod operators;
pub mod schema;
