//! Coerced filter values.
//!
//! Raw query text is coerced into `FilterValue` according to the field's
//! declared type before it ever reaches the expression tree, so consumers
//! never see untyped strings for typed fields.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A single coerced value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// UTF-8 text (also carries pattern-operator payloads)
    Text(String),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Calendar date with time of day
    DateTime(NaiveDateTime),
    /// Member of a declared enumerated token set
    Token(String),
}

impl FilterValue {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FilterValue::Text(_) => "text",
            FilterValue::Int(_) => "int",
            FilterValue::Float(_) => "float",
            FilterValue::Bool(_) => "bool",
            FilterValue::Date(_) => "date",
            FilterValue::DateTime(_) => "datetime",
            FilterValue::Token(_) => "enum",
        }
    }
}

/// Same-variant values order naturally; mixed variants do not order.
///
/// Range bounds are coerced from one field type, so the mixed case only
/// arises for callers comparing values they built themselves.
impl PartialOrd for FilterValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (FilterValue::Text(a), FilterValue::Text(b)) => Some(a.cmp(b)),
            (FilterValue::Int(a), FilterValue::Int(b)) => Some(a.cmp(b)),
            (FilterValue::Float(a), FilterValue::Float(b)) => a.partial_cmp(b),
            (FilterValue::Bool(a), FilterValue::Bool(b)) => Some(a.cmp(b)),
            (FilterValue::Date(a), FilterValue::Date(b)) => Some(a.cmp(b)),
            (FilterValue::DateTime(a), FilterValue::DateTime(b)) => Some(a.cmp(b)),
            (FilterValue::Token(a), FilterValue::Token(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(v) => write!(f, "{}", v),
            FilterValue::Int(v) => write!(f, "{}", v),
            FilterValue::Float(v) => write!(f, "{}", v),
            FilterValue::Bool(v) => write!(f, "{}", v),
            FilterValue::Date(v) => write!(f, "{}", v),
            FilterValue::DateTime(v) => write!(f, "{}", v),
            FilterValue::Token(v) => write!(f, "{}", v),
        }
    }
}

/// The value side of a predicate, shaped by the operator's arity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    /// One value (scalar and pattern operators)
    Scalar(FilterValue),
    /// One or more values (membership operators)
    List(Vec<FilterValue>),
    /// Closed range with ordered bounds (range operators)
    Range { low: FilterValue, high: FilterValue },
}

impl Operand {
    /// Number of values carried.
    pub fn len(&self) -> usize {
        match self {
            Operand::Scalar(_) => 1,
            Operand::List(values) => values.len(),
            Operand::Range { .. } => 2,
        }
    }

    /// Returns true when no values are carried.
    ///
    /// Compiler output always carries at least one value; this can only
    /// be true for a caller-built empty list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the carried values in order.
    pub fn values(&self) -> impl Iterator<Item = &FilterValue> {
        let slot: Vec<&FilterValue> = match self {
            Operand::Scalar(value) => vec![value],
            Operand::List(values) => values.iter().collect(),
            Operand::Range { low, high } => vec![low, high],
        };
        slot.into_iter()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(value) => write!(f, "{}", value),
            Operand::List(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            Operand::Range { low, high } => write!(f, "{}..{}", low, high),
        }
    }
}
