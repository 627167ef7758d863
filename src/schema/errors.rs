//! Schema declaration error types.
//!
//! These cover mistakes in the *caller's* field declarations, as opposed
//! to mistakes in a query (which are `CompileError`). Every variant is
//! terminal: a bad declaration is rejected before any query compiles
//! against it.

use thiserror::Error;

use crate::operators::Operator;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema declaration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Enum field declared without its token set
    #[error("field '{field}': enum type requires a non-empty variant list")]
    MissingVariants { field: String },

    /// Pattern operator granted to a field that cannot carry text
    #[error("field '{field}': operator '{operator}' applies to text-like fields, not {type_name}")]
    OperatorTypeMismatch {
        field: String,
        operator: Operator,
        type_name: &'static str,
    },

    /// Field key is not a valid field path
    #[error("field '{field}': {reason}")]
    InvalidFieldPath { field: String, reason: String },

    /// Schema file could not be read
    #[error("cannot read schema file '{path}': {reason}")]
    FileUnreadable { path: String, reason: String },

    /// Schema JSON did not parse into a declaration
    #[error("invalid schema JSON: {0}")]
    InvalidJson(String),
}

impl SchemaError {
    /// Create an invalid-field-path error.
    pub fn invalid_field_path(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFieldPath {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a file-unreadable error.
    pub fn file_unreadable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = SchemaError::MissingVariants {
            field: "category".to_string(),
        };
        assert!(err.to_string().contains("category"));

        let err = SchemaError::OperatorTypeMismatch {
            field: "salary_from".to_string(),
            operator: Operator::StartsWith,
            type_name: "int",
        };
        let text = err.to_string();
        assert!(text.contains("salary_from"));
        assert!(text.contains("startswith"));
        assert!(text.contains("int"));
    }
}
