//! Compiled expression tree structures.
//!
//! The tree is two levels deep by construction: an ExpressionTree ORs
//! together ConjunctionGroups, and each group ANDs together Predicates.
//! There is no deeper nesting and no mutation path after compilation.

use std::fmt;

use serde::Serialize;

use crate::operators::Operator;

use super::path::FieldPath;
use super::value::Operand;

/// A resolved field/operator/value condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    /// Field the condition applies to
    pub field: FieldPath,
    /// Comparison operator
    pub operator: Operator,
    /// Coerced value(s), shaped by the operator's arity
    pub operand: Operand,
}

impl Predicate {
    /// Create a new predicate.
    pub fn new(field: FieldPath, operator: Operator, operand: Operand) -> Self {
        Self {
            field,
            operator,
            operand,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.operand)
    }
}

/// Predicates joined by logical AND, in query order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConjunctionGroup {
    predicates: Vec<Predicate>,
}

impl ConjunctionGroup {
    /// Create a group from its predicates.
    ///
    /// Compiler output always holds at least one predicate per group.
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    /// The predicates in query order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Number of predicates in the group.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns true when the group holds no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Iterate the predicates in query order.
    pub fn iter(&self) -> std::slice::Iter<'_, Predicate> {
        self.predicates.iter()
    }
}

impl fmt::Display for ConjunctionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", predicate)?;
        }
        write!(f, ")")
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One ordering key: a field and a direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortKey {
    /// Field to sort by
    pub field: FieldPath,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(field: FieldPath) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: FieldPath) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction.as_str())
    }
}

/// Ordering clause: sort keys in declaration order.
///
/// Repeated fields are preserved as given; the execution layer decides
/// what repeated keys mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSpec {
    keys: Vec<SortKey>,
}

impl OrderSpec {
    /// Create an order spec from its keys.
    pub fn new(keys: Vec<SortKey>) -> Self {
        Self { keys }
    }

    /// The sort keys in declaration order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Number of sort keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true when no keys are present.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate the sort keys in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, SortKey> {
        self.keys.iter()
    }
}

/// The complete compiled filter: groups joined by OR, plus ordering.
///
/// Zero groups means "no filtering applied" — consumers must select
/// everything, never nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionTree {
    groups: Vec<ConjunctionGroup>,
    order: Option<OrderSpec>,
}

impl ExpressionTree {
    /// Create a tree from its groups and optional ordering.
    pub fn new(groups: Vec<ConjunctionGroup>, order: Option<OrderSpec>) -> Self {
        Self { groups, order }
    }

    /// The conjunction groups in query order.
    pub fn groups(&self) -> &[ConjunctionGroup] {
        &self.groups
    }

    /// The ordering clause, if the query carried one.
    pub fn order(&self) -> Option<&OrderSpec> {
        self.order.as_ref()
    }

    /// Returns true when the tree filters nothing (zero groups).
    pub fn is_unfiltered(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of predicates across all groups.
    pub fn predicate_count(&self) -> usize {
        self.groups.iter().map(ConjunctionGroup::len).sum()
    }

    /// Iterate every predicate across all groups, in query order.
    pub fn predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.groups.iter().flat_map(ConjunctionGroup::iter)
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            write!(f, "unfiltered")?;
        } else {
            for (i, group) in self.groups.iter().enumerate() {
                if i > 0 {
                    write!(f, " OR ")?;
                }
                write!(f, "{}", group)?;
            }
        }

        if let Some(order) = &self.order {
            write!(f, " order by ")?;
            for (i, key) in order.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", key)?;
            }
        }

        Ok(())
    }
}
