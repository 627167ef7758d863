//! Compile error taxonomy.
//!
//! Every variant is a deterministic input-validation failure: the same
//! query against the same schema always produces the same error. Nothing
//! here is transient and nothing is retried. No partial tree accompanies
//! an error.

use thiserror::Error;

use crate::operators::Operator;

/// Result type for compilation
pub type CompileResult<T> = Result<T, CompileError>;

/// Query compilation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// Token does not fit the `field__operator=value` shape
    #[error("malformed predicate '{token}': {reason}")]
    MalformedPredicate { token: String, reason: String },

    /// Operator spelling is not in the registry
    #[error("unknown operator '{name}'")]
    UnknownOperator { name: String },

    /// Field path is not declared in the schema
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// Operator exists but the field does not permit it
    #[error("operator '{operator}' is not allowed for field '{field}'")]
    OperatorNotAllowed { field: String, operator: Operator },

    /// Value count does not match the operator's arity
    #[error("operator '{operator}' on field '{field}' expects {expected}, got {actual}")]
    ArityMismatch {
        field: String,
        operator: Operator,
        expected: &'static str,
        actual: usize,
    },

    /// Raw value cannot be parsed into the field's declared type
    #[error("field '{field}': cannot coerce '{value}' to {expected}")]
    TypeCoercion {
        field: String,
        value: String,
        expected: &'static str,
    },

    /// Range pair whose lower bound does not precede its upper bound
    #[error("field '{field}': invalid range, '{low}' does not precede '{high}'")]
    InvalidRange {
        field: String,
        low: String,
        high: String,
    },

    /// Value is not a member of the field's declared token set
    #[error("field '{field}': '{value}' is not one of the permitted values ({permitted})")]
    InvalidEnumValue {
        field: String,
        value: String,
        permitted: String,
    },
}

impl CompileError {
    /// Create a malformed-predicate error.
    pub fn malformed(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPredicate {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown-field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Create a type-coercion error.
    pub fn type_coercion(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::TypeCoercion {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }
}
