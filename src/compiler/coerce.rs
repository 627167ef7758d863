//! Value coercion.
//!
//! Turns the raw string values of a predicate into typed `FilterValue`s
//! according to the field's declared type, enforcing the operator's
//! arity on the way. Pattern operators skip type coercion entirely:
//! their payload is raw text even on enum fields, since a prefix or
//! substring fragment is not a member token.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

use crate::ast::{FieldPath, FilterValue, Operand};
use crate::operators::{Arity, Operator};
use crate::schema::{FieldRule, FieldType};

use super::errors::{CompileError, CompileResult};

/// Date format accepted for `date` fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Datetime format accepted for `datetime` fields.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ISO-8601 style datetime format, also accepted for `datetime` fields.
pub const DATETIME_FORMAT_T: &str = "%Y-%m-%dT%H:%M:%S";

/// Coerce a predicate's raw values into an operand.
///
/// Values arrive trimmed from the parser. The operator must already be
/// permitted on the field; this function only shapes and types.
pub fn coerce(
    field: &FieldPath,
    rule: &FieldRule,
    operator: Operator,
    values: &[String],
) -> CompileResult<Operand> {
    if operator.is_pattern() {
        expect_count(field, operator, values, 1)?;
        return Ok(Operand::Scalar(FilterValue::Text(values[0].clone())));
    }

    match operator.arity() {
        Arity::Scalar => {
            expect_count(field, operator, values, 1)?;
            let value = coerce_single(field, &rule.field_type, &values[0])?;
            Ok(Operand::Scalar(value))
        }
        Arity::List => {
            let coerced: CompileResult<Vec<FilterValue>> = values
                .iter()
                .map(|raw| coerce_single(field, &rule.field_type, raw))
                .collect();
            Ok(Operand::List(coerced?))
        }
        Arity::Pair => {
            expect_count(field, operator, values, 2)?;
            let low = coerce_single(field, &rule.field_type, &values[0])?;
            let high = coerce_single(field, &rule.field_type, &values[1])?;
            if !matches!(
                low.partial_cmp(&high),
                Some(Ordering::Less | Ordering::Equal)
            ) {
                return Err(CompileError::InvalidRange {
                    field: field.to_string(),
                    low: low.to_string(),
                    high: high.to_string(),
                });
            }
            Ok(Operand::Range { low, high })
        }
    }
}

/// Enforce an exact value count for the operator.
fn expect_count(
    field: &FieldPath,
    operator: Operator,
    values: &[String],
    expected: usize,
) -> CompileResult<()> {
    if values.len() != expected {
        return Err(CompileError::ArityMismatch {
            field: field.to_string(),
            operator,
            expected: operator.arity().expects(),
            actual: values.len(),
        });
    }
    Ok(())
}

/// Coerce one raw value into the field's declared type.
fn coerce_single(
    field: &FieldPath,
    field_type: &FieldType,
    raw: &str,
) -> CompileResult<FilterValue> {
    match field_type {
        FieldType::Text => Ok(FilterValue::Text(raw.to_string())),
        FieldType::Int => raw
            .parse::<i64>()
            .map(FilterValue::Int)
            .map_err(|_| CompileError::type_coercion(field.to_string(), raw, "int")),
        FieldType::Float => raw
            .parse::<f64>()
            .map(FilterValue::Float)
            .map_err(|_| CompileError::type_coercion(field.to_string(), raw, "float")),
        FieldType::Bool => parse_bool(raw)
            .map(FilterValue::Bool)
            .ok_or_else(|| CompileError::type_coercion(field.to_string(), raw, "bool")),
        FieldType::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(FilterValue::Date)
            .map_err(|_| CompileError::type_coercion(field.to_string(), raw, "date")),
        FieldType::DateTime => parse_datetime(raw)
            .map(FilterValue::DateTime)
            .ok_or_else(|| CompileError::type_coercion(field.to_string(), raw, "datetime")),
        FieldType::Enum { variants } => {
            if variants.iter().any(|v| v == raw) {
                Ok(FilterValue::Token(raw.to_string()))
            } else {
                Err(CompileError::InvalidEnumValue {
                    field: field.to_string(),
                    value: raw.to_string(),
                    permitted: variants.join(", "),
                })
            }
        }
    }
}

/// Accepted boolean spellings, case-insensitive.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Accepts the space-separated and the `T`-separated datetime spellings.
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT_T))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldRule;

    fn field(name: &str) -> FieldPath {
        FieldPath::single(name)
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_scalar_int() {
        let operand = coerce(
            &field("salary_from"),
            &FieldRule::integer(vec![Operator::Eq]),
            Operator::Eq,
            &strings(&["60"]),
        )
        .unwrap();
        assert_eq!(operand, Operand::Scalar(FilterValue::Int(60)));
    }

    #[test]
    fn test_scalar_int_rejects_text() {
        let err = coerce(
            &field("salary_from"),
            &FieldRule::integer(vec![Operator::Eq]),
            Operator::Eq,
            &strings(&["abc"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CompileError::type_coercion("salary_from", "abc", "int")
        );
    }

    #[test]
    fn test_scalar_float() {
        let operand = coerce(
            &field("salary_up_to"),
            &FieldRule::float(vec![Operator::Gt]),
            Operator::Gt,
            &strings(&["100.5"]),
        )
        .unwrap();
        assert_eq!(operand, Operand::Scalar(FilterValue::Float(100.5)));

        let err = coerce(
            &field("salary_up_to"),
            &FieldRule::float(vec![Operator::Gt]),
            Operator::Gt,
            &strings(&["100/12"]),
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::TypeCoercion { .. }));
    }

    #[test]
    fn test_bool_spellings() {
        let rule = FieldRule::boolean(vec![Operator::Eq]);
        for truthy in ["true", "True", "T", "yes", "Y", "on", "1"] {
            let operand =
                coerce(&field("is_active"), &rule, Operator::Eq, &strings(&[truthy])).unwrap();
            assert_eq!(operand, Operand::Scalar(FilterValue::Bool(true)), "{}", truthy);
        }
        for falsy in ["false", "F", "no", "N", "off", "0"] {
            let operand =
                coerce(&field("is_active"), &rule, Operator::Eq, &strings(&[falsy])).unwrap();
            assert_eq!(operand, Operand::Scalar(FilterValue::Bool(false)), "{}", falsy);
        }
        let err = coerce(&field("is_active"), &rule, Operator::Eq, &strings(&["maybe"]))
            .unwrap_err();
        assert!(matches!(err, CompileError::TypeCoercion { .. }));
    }

    #[test]
    fn test_date_format() {
        let operand = coerce(
            &field("created_at"),
            &FieldRule::date(vec![Operator::Eq]),
            Operator::Eq,
            &strings(&["2023-05-01"]),
        )
        .unwrap();
        let expected = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        assert_eq!(operand, Operand::Scalar(FilterValue::Date(expected)));

        let err = coerce(
            &field("created_at"),
            &FieldRule::date(vec![Operator::Eq]),
            Operator::Eq,
            &strings(&["01-05-2023"]),
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::TypeCoercion { .. }));
    }

    #[test]
    fn test_datetime_both_spellings() {
        let rule = FieldRule::datetime(vec![Operator::Eq]);
        let expected = NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap();

        for spelling in ["2023-05-01 15:30:00", "2023-05-01T15:30:00"] {
            let operand = coerce(
                &field("updated_at"),
                &rule,
                Operator::Eq,
                &strings(&[spelling]),
            )
            .unwrap();
            assert_eq!(operand, Operand::Scalar(FilterValue::DateTime(expected)));
        }
    }

    #[test]
    fn test_enum_membership() {
        let rule = FieldRule::enumerated(&["Finance", "IT"], vec![Operator::Eq]);
        let operand = coerce(
            &field("category"),
            &rule,
            Operator::Eq,
            &strings(&["Finance"]),
        )
        .unwrap();
        assert_eq!(
            operand,
            Operand::Scalar(FilterValue::Token("Finance".to_string()))
        );

        let err = coerce(
            &field("category"),
            &rule,
            Operator::Eq,
            &strings(&["Plumbing"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CompileError::InvalidEnumValue {
                field: "category".to_string(),
                value: "Plumbing".to_string(),
                permitted: "Finance, IT".to_string(),
            }
        );
    }

    #[test]
    fn test_pattern_payload_stays_text() {
        // Prefix fragments are not member tokens; pattern operators skip
        // enum validation and type coercion alike.
        let rule = FieldRule::enumerated(&["Medicine"], vec![Operator::StartsWith]);
        let operand = coerce(
            &field("category"),
            &rule,
            Operator::StartsWith,
            &strings(&["Med"]),
        )
        .unwrap();
        assert_eq!(
            operand,
            Operand::Scalar(FilterValue::Text("Med".to_string()))
        );
    }

    #[test]
    fn test_scalar_arity_enforced() {
        let err = coerce(
            &field("salary_from"),
            &FieldRule::integer(vec![Operator::Eq]),
            Operator::Eq,
            &strings(&["1", "2"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CompileError::ArityMismatch {
                field: "salary_from".to_string(),
                operator: Operator::Eq,
                expected: "exactly one value",
                actual: 2,
            }
        );
    }

    #[test]
    fn test_list_accepts_one_or_more() {
        let rule = FieldRule::integer(vec![Operator::In]);
        let one = coerce(&field("id"), &rule, Operator::In, &strings(&["7"])).unwrap();
        assert_eq!(one, Operand::List(vec![FilterValue::Int(7)]));

        let many = coerce(&field("id"), &rule, Operator::In, &strings(&["2", "3"])).unwrap();
        assert_eq!(
            many,
            Operand::List(vec![FilterValue::Int(2), FilterValue::Int(3)])
        );
    }

    #[test]
    fn test_pair_arity_enforced() {
        let rule = FieldRule::integer(vec![Operator::Between]);
        for bad in [&["1"][..], &["1", "2", "3"][..]] {
            let err = coerce(&field("salary_from"), &rule, Operator::Between, &strings(bad))
                .unwrap_err();
            assert!(matches!(err, CompileError::ArityMismatch { .. }));
        }
    }

    #[test]
    fn test_range_bounds_must_be_ordered() {
        let rule = FieldRule::date(vec![Operator::Between]);
        let ok = coerce(
            &field("created_at"),
            &rule,
            Operator::Between,
            &strings(&["2023-01-01", "2023-01-10"]),
        )
        .unwrap();
        assert!(matches!(ok, Operand::Range { .. }));

        let err = coerce(
            &field("created_at"),
            &rule,
            Operator::Between,
            &strings(&["2023-01-10", "2023-01-05"]),
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::InvalidRange { .. }));
    }

    #[test]
    fn test_range_equal_bounds_are_legal() {
        let rule = FieldRule::integer(vec![Operator::Between]);
        let operand = coerce(
            &field("salary_from"),
            &rule,
            Operator::Between,
            &strings(&["5", "5"]),
        )
        .unwrap();
        assert_eq!(
            operand,
            Operand::Range {
                low: FilterValue::Int(5),
                high: FilterValue::Int(5),
            }
        );
    }

    #[test]
    fn test_nan_bound_is_invalid_range() {
        let rule = FieldRule::float(vec![Operator::Between]);
        let err = coerce(
            &field("salary_up_to"),
            &rule,
            Operator::Between,
            &strings(&["NaN", "10"]),
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::InvalidRange { .. }));
    }
}
