//! Field path addressing.
//!
//! A field path names either a field on the filtered entity (`title`) or
//! a field on a related entity (`company.title`). At most one dot is
//! allowed; deeper nesting is rejected at parse time.

use std::fmt;

use serde::{Serialize, Serializer};

/// A parsed field reference, plain or related.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    relation: Option<String>,
    name: String,
}

impl FieldPath {
    /// Create a path to a field on the filtered entity itself.
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            relation: None,
            name: name.into(),
        }
    }

    /// Create a path to a field on a related entity.
    pub fn related(relation: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            relation: Some(relation.into()),
            name: name.into(),
        }
    }

    /// Parse a raw field path.
    ///
    /// Accepts `name` or `relation.name` with non-empty segments; anything
    /// else is rejected with a reason string the caller wraps into its own
    /// error type.
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim();
        if text.is_empty() {
            return Err("empty field path".to_string());
        }

        let segments: Vec<&str> = text.split('.').collect();
        match segments.as_slice() {
            [name] => Ok(FieldPath::single(*name)),
            [relation, name] => {
                if relation.is_empty() || name.is_empty() {
                    return Err(format!("field path '{}' has an empty segment", text));
                }
                Ok(FieldPath::related(*relation, *name))
            }
            _ => Err(format!(
                "field path '{}' may contain at most one '.'",
                text
            )),
        }
    }

    /// The related-entity segment, if any.
    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }

    /// The field name segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this path addresses a related entity.
    pub fn is_related(&self) -> bool {
        self.relation.is_some()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.relation {
            Some(relation) => write!(f, "{}.{}", relation, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
