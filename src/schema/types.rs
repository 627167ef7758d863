//! Schema type definitions for the filter query language.
//!
//! Supported field types:
//! - text: UTF-8 string
//! - int: 64-bit signed integer
//! - float: 64-bit floating point
//! - bool: Boolean
//! - date: calendar date, `%Y-%m-%d`
//! - datetime: calendar date with time of day
//! - enum: closed token set declared by the caller

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ast::FieldPath;
use crate::operators::Operator;

use super::errors::{SchemaError, SchemaResult};

/// Declared value type of a filterable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    Text,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
    /// Calendar date
    Date,
    /// Calendar date with time of day
    DateTime,
    /// Closed token set
    Enum {
        /// Permitted tokens, compared verbatim
        variants: Vec<String>,
    },
}

impl FieldType {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Enum { .. } => "enum",
        }
    }

    /// Returns true for types whose values are text shaped.
    ///
    /// Pattern operators may only be declared on these.
    pub fn is_text_like(&self) -> bool {
        matches!(self, FieldType::Text | FieldType::Enum { .. })
    }
}

/// Per-field declaration: value type plus the operators the caller
/// permits on it.
///
/// An empty operator list declares an order-only field: usable in
/// `order_by` but in no filter predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Declared value type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Operators permitted on this field
    pub operators: Vec<Operator>,
}

impl FieldRule {
    /// Create a rule from a type and its permitted operators.
    pub fn new(field_type: FieldType, operators: Vec<Operator>) -> Self {
        Self {
            field_type,
            operators,
        }
    }

    /// Create a text field rule.
    pub fn text(operators: Vec<Operator>) -> Self {
        Self::new(FieldType::Text, operators)
    }

    /// Create an integer field rule.
    pub fn integer(operators: Vec<Operator>) -> Self {
        Self::new(FieldType::Int, operators)
    }

    /// Create a float field rule.
    pub fn float(operators: Vec<Operator>) -> Self {
        Self::new(FieldType::Float, operators)
    }

    /// Create a boolean field rule.
    pub fn boolean(operators: Vec<Operator>) -> Self {
        Self::new(FieldType::Bool, operators)
    }

    /// Create a date field rule.
    pub fn date(operators: Vec<Operator>) -> Self {
        Self::new(FieldType::Date, operators)
    }

    /// Create a datetime field rule.
    pub fn datetime(operators: Vec<Operator>) -> Self {
        Self::new(FieldType::DateTime, operators)
    }

    /// Create an enumerated-token field rule.
    pub fn enumerated(variants: &[&str], operators: Vec<Operator>) -> Self {
        Self::new(
            FieldType::Enum {
                variants: variants.iter().map(|v| v.to_string()).collect(),
            },
            operators,
        )
    }

    /// Returns true when the operator is permitted on this field.
    pub fn permits(&self, operator: Operator) -> bool {
        self.operators.contains(&operator)
    }

    /// Validates this rule's internal consistency.
    fn validate(&self, field: &str) -> SchemaResult<()> {
        if let FieldType::Enum { variants } = &self.field_type {
            if variants.is_empty() {
                return Err(SchemaError::MissingVariants {
                    field: field.to_string(),
                });
            }
        }

        for operator in &self.operators {
            if operator.is_pattern() && !self.field_type.is_text_like() {
                return Err(SchemaError::OperatorTypeMismatch {
                    field: field.to_string(),
                    operator: *operator,
                    type_name: self.field_type.type_name(),
                });
            }
        }

        Ok(())
    }
}

/// Complete filter schema: field path -> rule.
///
/// Keys are full dotted spellings (`title`, `company.title`); related
/// fields are declared the same way as plain ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSchema {
    /// Field declarations
    fields: HashMap<String, FieldRule>,
}

impl FilterSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field, replacing any existing rule under the same path.
    pub fn field(mut self, path: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.insert(path.into(), rule);
        self
    }

    /// Look up the rule for a field path.
    pub fn rule(&self, path: &str) -> Option<&FieldRule> {
        self.fields.get(path)
    }

    /// Returns true when the field path is declared.
    pub fn contains(&self, path: &str) -> bool {
        self.fields.contains_key(path)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate the declared field paths.
    pub fn field_paths(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Validates the schema structure itself.
    ///
    /// Checks every key parses as a field path and every rule is
    /// internally consistent. The compiler runs this once at
    /// construction so per-query validation stays a map lookup.
    pub fn validate_structure(&self) -> SchemaResult<()> {
        for (path, rule) in &self.fields {
            FieldPath::parse(path)
                .map_err(|reason| SchemaError::invalid_field_path(path, reason))?;
            rule.validate(path)?;
        }
        Ok(())
    }
}
