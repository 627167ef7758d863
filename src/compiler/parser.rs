//! Predicate token parsing.
//!
//! One token has the shape `field_path__operator=value[,value...]`. The
//! key splits on the first `=`; later `=` characters belong to the
//! value. The value splits on commas unconditionally — a literal comma
//! inside a value is not expressible.

use crate::ast::FieldPath;
use crate::operators::Operator;

use super::errors::{CompileError, CompileResult};

/// Delimiter between the field path and the operator name.
pub const FIELD_OP_DELIMITER: &str = "__";

/// A parsed but not yet validated predicate token.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPredicate {
    /// Parsed field path (not yet resolved against a schema)
    pub field: FieldPath,
    /// Registered operator
    pub operator: Operator,
    /// Raw values, trimmed, in query order
    pub values: Vec<String>,
}

/// Parse one predicate token into field path, operator, and raw values.
pub fn parse_token(token: &str) -> CompileResult<RawPredicate> {
    let (key, value) = token
        .split_once('=')
        .ok_or_else(|| CompileError::malformed(token, "missing '=' between filter and value"))?;

    let key = key.trim();
    let parts: Vec<&str> = key.split(FIELD_OP_DELIMITER).collect();
    let (field_text, operator_name) = match parts.as_slice() {
        [field_text, operator_name] => (field_text.trim(), operator_name.trim()),
        _ => {
            return Err(CompileError::malformed(
                token,
                "expected exactly one '__' between field and operator",
            ))
        }
    };

    if field_text.is_empty() {
        return Err(CompileError::malformed(token, "empty field path"));
    }
    if operator_name.is_empty() {
        return Err(CompileError::malformed(token, "empty operator name"));
    }

    let field = FieldPath::parse(field_text)
        .map_err(|reason| CompileError::malformed(token, reason))?;

    let operator = Operator::parse(operator_name).ok_or(CompileError::UnknownOperator {
        name: operator_name.to_string(),
    })?;

    let value = value.trim();
    if value.is_empty() {
        return Err(CompileError::malformed(token, "empty value"));
    }

    let values = value.split(',').map(|v| v.trim().to_string()).collect();

    Ok(RawPredicate {
        field,
        operator,
        values,
    })
}
