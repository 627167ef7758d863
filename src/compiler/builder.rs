//! Expression tree assembly.
//!
//! Walks the segmented query, resolves every token against the schema
//! and folds the results into an [`ExpressionTree`]. All schema checks
//! happen here: field existence, operator permission and, through the
//! coercion layer, value typing.

use crate::ast::{ConjunctionGroup, ExpressionTree, FieldPath, OrderSpec, Predicate, SortKey};
use crate::schema::FilterSchema;

use super::coerce;
use super::errors::{CompileError, CompileResult};
use super::lexer::Segments;
use super::parser;

/// Builds expression trees from segmented queries.
pub struct TreeBuilder<'a> {
    schema: &'a FilterSchema,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(schema: &'a FilterSchema) -> Self {
        TreeBuilder { schema }
    }

    /// Resolve all segments into a validated tree.
    pub fn build(&self, segments: Segments) -> CompileResult<ExpressionTree> {
        let mut groups = Vec::with_capacity(segments.groups.len());
        for tokens in &segments.groups {
            let mut predicates = Vec::with_capacity(tokens.len());
            for token in tokens {
                predicates.push(self.build_predicate(token)?);
            }
            groups.push(ConjunctionGroup::new(predicates));
        }

        let order = match &segments.order {
            Some(raw) => self.build_order(raw)?,
            None => None,
        };

        Ok(ExpressionTree::new(groups, order))
    }

    /// Resolve one `field__op=value` token into a typed predicate.
    fn build_predicate(&self, token: &str) -> CompileResult<Predicate> {
        let raw = parser::parse_token(token)?;
        let key = raw.field.to_string();

        let rule = self
            .schema
            .rule(&key)
            .ok_or_else(|| CompileError::unknown_field(&key))?;

        if !rule.permits(raw.operator) {
            return Err(CompileError::OperatorNotAllowed {
                field: key,
                operator: raw.operator,
            });
        }

        let operand = coerce::coerce(&raw.field, rule, raw.operator, &raw.values)?;
        Ok(Predicate::new(raw.field, raw.operator, operand))
    }

    /// Resolve the `order_by` value into sort keys.
    ///
    /// An empty value is treated as "no ordering requested" rather than
    /// an error, so `order_by=` is a harmless no-op.
    fn build_order(&self, raw: &str) -> CompileResult<Option<OrderSpec>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let mut keys = Vec::new();
        for entry in trimmed.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(CompileError::malformed(
                    trimmed,
                    "empty entry in order_by list",
                ));
            }

            let (name, descending) = match entry.strip_prefix('-') {
                Some(rest) => (rest.trim(), true),
                None => (entry, false),
            };
            if name.is_empty() {
                return Err(CompileError::malformed(
                    entry,
                    "order entry has no field name",
                ));
            }

            let path = FieldPath::parse(name)
                .map_err(|reason| CompileError::malformed(entry, reason))?;
            let key = path.to_string();
            if !self.schema.contains(&key) {
                return Err(CompileError::unknown_field(key));
            }

            keys.push(if descending {
                SortKey::desc(path)
            } else {
                SortKey::asc(path)
            });
        }

        Ok(Some(OrderSpec::new(keys)))
    }
}
