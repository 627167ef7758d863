//! Compiler configuration.
//!
//! Only the two separator symbols are configurable. Everything else
//! about the query syntax (`__`, `=`, `,`, the `order_by` key) is
//! fixed, and separators that would collide with it are rejected.

use thiserror::Error;

/// Default group (OR) separator.
pub const DEFAULT_GROUP_SEPARATOR: char = '|';

/// Default predicate (AND) separator.
pub const DEFAULT_PREDICATE_SEPARATOR: char = '&';

/// Characters with fixed meaning in the query syntax.
const RESERVED: [char; 4] = ['=', ',', '.', '_'];

/// Separator misconfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Both separators are the same character
    #[error("group and predicate separators must differ (both '{0}')")]
    SeparatorClash(char),

    /// Separator collides with fixed query syntax
    #[error("separator '{0}' conflicts with the query syntax")]
    ReservedSeparator(char),
}

/// Separator configuration for a compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerOptions {
    group_separator: char,
    predicate_separator: char,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            group_separator: DEFAULT_GROUP_SEPARATOR,
            predicate_separator: DEFAULT_PREDICATE_SEPARATOR,
        }
    }
}

impl CompilerOptions {
    /// Create options with custom separators.
    ///
    /// The two must differ, and neither may be alphanumeric, whitespace,
    /// or one of the reserved syntax characters.
    pub fn new(group_separator: char, predicate_separator: char) -> Result<Self, OptionsError> {
        if group_separator == predicate_separator {
            return Err(OptionsError::SeparatorClash(group_separator));
        }
        for separator in [group_separator, predicate_separator] {
            if separator.is_alphanumeric()
                || separator.is_whitespace()
                || RESERVED.contains(&separator)
            {
                return Err(OptionsError::ReservedSeparator(separator));
            }
        }
        Ok(Self {
            group_separator,
            predicate_separator,
        })
    }

    /// The group (OR) separator.
    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    /// The predicate (AND) separator.
    pub fn predicate_separator(&self) -> char {
        self.predicate_separator
    }
}
