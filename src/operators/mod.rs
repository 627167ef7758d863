//! Operator registry subsystem for filtq
//!
//! The query language supports a closed set of comparison operators.
//!
//! # Design Principles
//!
//! - Closed: the registry is a static enum, no runtime registration
//! - Spelled: every operator has exactly one query-string spelling
//! - Shaped: every operator declares the value arity it consumes
//!
//! Per-field permission (which operators a field accepts) lives in the
//! schema subsystem; this module only answers what an operator *is*.

mod registry;

pub use registry::{Arity, Operator};
