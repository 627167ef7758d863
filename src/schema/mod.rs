//! Schema subsystem for filtq
//!
//! Callers declare which fields may be filtered, with what type, and
//! under which operators. Nothing compiles against an undeclared field.
//!
//! # Design Principles
//!
//! - Explicit: no schema inference, the caller declares everything (S1)
//! - Validated up front: structural checks run once, at load (S2)
//! - Declarative: schemas are plain data, buildable in code or JSON (S3)
//! - Capability-based: an operator is usable only where granted (S4)

mod errors;
mod loader;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use loader::{load_file, parse_json};
pub use types::{FieldRule, FieldType, FilterSchema};
