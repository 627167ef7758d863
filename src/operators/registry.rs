//! Operator registry per the filter query language.
//!
//! Every operator the language understands is listed here, together with
//! its query-string spelling and the value shape it consumes. Validation
//! elsewhere is a table lookup against this enum; there is no dynamic
//! registration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value shape an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    /// Exactly one value
    Scalar,
    /// One or more values
    List,
    /// Exactly two values, low then high
    Pair,
}

impl Arity {
    /// Human-readable requirement, used in arity error messages.
    pub fn expects(&self) -> &'static str {
        match self {
            Arity::Scalar => "exactly one value",
            Arity::List => "at least one value",
            Arity::Pair => "exactly two values",
        }
    }
}

/// Comparison operators supported by the filter query language.
///
/// Serde spellings match the query-string spellings, so the same names
/// appear in schema declarations and in compiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Equality
    #[serde(rename = "eq")]
    Eq,

    /// Negated equality
    #[serde(rename = "not_eq")]
    NotEq,

    /// Greater than
    #[serde(rename = "gt")]
    Gt,

    /// Less than
    #[serde(rename = "lt")]
    Lt,

    /// Greater than or equal
    #[serde(rename = "gte")]
    Gte,

    /// Less than or equal
    #[serde(rename = "lte")]
    Lte,

    /// Membership in a value list
    #[serde(rename = "in_")]
    In,

    /// Negated membership
    #[serde(rename = "not_in")]
    NotIn,

    /// Text prefix match
    #[serde(rename = "startswith")]
    StartsWith,

    /// Text suffix match
    #[serde(rename = "endswith")]
    EndsWith,

    /// Substring match
    #[serde(rename = "contains")]
    Contains,

    /// Case-insensitive substring match
    #[serde(rename = "icontains")]
    IContains,

    /// SQL-style pattern match (% and _ wildcards)
    #[serde(rename = "like")]
    Like,

    /// Case-insensitive pattern match
    #[serde(rename = "ilike")]
    ILike,

    /// Negated pattern match
    #[serde(rename = "not_like")]
    NotLike,

    /// Closed range: low <= field <= high
    #[serde(rename = "between")]
    Between,

    /// Negated closed range
    #[serde(rename = "not_between")]
    NotBetween,
}

impl Operator {
    /// All registered operators, in declaration order.
    pub const ALL: [Operator; 17] = [
        Operator::Eq,
        Operator::NotEq,
        Operator::Gt,
        Operator::Lt,
        Operator::Gte,
        Operator::Lte,
        Operator::In,
        Operator::NotIn,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::Contains,
        Operator::IContains,
        Operator::Like,
        Operator::ILike,
        Operator::NotLike,
        Operator::Between,
        Operator::NotBetween,
    ];

    /// Get the query-string spelling of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::NotEq => "not_eq",
            Operator::Gt => "gt",
            Operator::Lt => "lt",
            Operator::Gte => "gte",
            Operator::Lte => "lte",
            Operator::In => "in_",
            Operator::NotIn => "not_in",
            Operator::StartsWith => "startswith",
            Operator::EndsWith => "endswith",
            Operator::Contains => "contains",
            Operator::IContains => "icontains",
            Operator::Like => "like",
            Operator::ILike => "ilike",
            Operator::NotLike => "not_like",
            Operator::Between => "between",
            Operator::NotBetween => "not_between",
        }
    }

    /// Look up an operator by its query-string spelling.
    pub fn parse(name: &str) -> Option<Operator> {
        match name {
            "eq" => Some(Operator::Eq),
            "not_eq" => Some(Operator::NotEq),
            "gt" => Some(Operator::Gt),
            "lt" => Some(Operator::Lt),
            "gte" => Some(Operator::Gte),
            "lte" => Some(Operator::Lte),
            "in_" => Some(Operator::In),
            "not_in" => Some(Operator::NotIn),
            "startswith" => Some(Operator::StartsWith),
            "endswith" => Some(Operator::EndsWith),
            "contains" => Some(Operator::Contains),
            "icontains" => Some(Operator::IContains),
            "like" => Some(Operator::Like),
            "ilike" => Some(Operator::ILike),
            "not_like" => Some(Operator::NotLike),
            "between" => Some(Operator::Between),
            "not_between" => Some(Operator::NotBetween),
            _ => None,
        }
    }

    /// Value shape this operator consumes.
    pub fn arity(&self) -> Arity {
        match self {
            Operator::In | Operator::NotIn => Arity::List,
            Operator::Between | Operator::NotBetween => Arity::Pair,
            _ => Arity::Scalar,
        }
    }

    /// Returns true for operators that match text shape.
    ///
    /// Pattern operators take their value as raw text regardless of the
    /// field's declared type, and may only be declared on text-like
    /// fields.
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            Operator::StartsWith
                | Operator::EndsWith
                | Operator::Contains
                | Operator::IContains
                | Operator::Like
                | Operator::ILike
                | Operator::NotLike
        )
    }

    /// Returns true for the membership operators.
    pub fn is_membership(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// Returns true for the range operators.
    pub fn is_range(&self) -> bool {
        matches!(self, Operator::Between | Operator::NotBetween)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
