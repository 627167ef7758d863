//! Expression tree subsystem for filtq
//!
//! The compiled output model consumed by execution collaborators.
//!
//! # Design Principles
//!
//! - Two-level: OR of AND-groups, never deeper (T1)
//! - Typed: values are coerced before they enter the tree (T2)
//! - Immutable: read accessors only once compiled (T3)
//! - Zero groups means "select all", never "select none" (T4)

mod path;
mod tree;
mod value;

pub use path::FieldPath;
pub use tree::{
    ConjunctionGroup, ExpressionTree, OrderSpec, Predicate, SortDirection, SortKey,
};
pub use value::{FilterValue, Operand};
