//! Query segmentation.
//!
//! Splits the raw string on the group separator, then each group on the
//! predicate separator, trimming whitespace around both. The `order_by`
//! token is pulled out wherever it appears and handed to the builder
//! separately; it never becomes a filter predicate.
//!
//! Only the entirely empty input means "no filter". An empty group or an
//! empty token inside a non-empty input is malformed — the compiler
//! never silently drops query text.

use super::errors::{CompileError, CompileResult};
use super::options::CompilerOptions;

/// Key of the ordering pseudo-predicate, matched case-sensitively.
pub const ORDER_KEY: &str = "order_by";

/// Segmented query: predicate tokens per group, plus the raw order value.
#[derive(Debug, Clone, PartialEq)]
pub struct Segments {
    /// Raw predicate tokens, grouped; groups are OR'd, tokens AND'd
    pub groups: Vec<Vec<String>>,
    /// Raw `order_by` value, if the query carried one
    pub order: Option<String>,
}

/// Split a raw query into predicate token groups and an order value.
pub fn segment(raw: &str, options: &CompilerOptions) -> CompileResult<Segments> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Segments {
            groups: Vec::new(),
            order: None,
        });
    }

    let mut groups = Vec::new();
    let mut order: Option<String> = None;

    for group_text in raw.split(options.group_separator()) {
        let group_text = group_text.trim();
        if group_text.is_empty() {
            return Err(CompileError::malformed(raw, "empty filter group"));
        }

        let mut tokens = Vec::new();
        for token in group_text.split(options.predicate_separator()) {
            let token = token.trim();
            if token.is_empty() {
                return Err(CompileError::malformed(group_text, "empty predicate token"));
            }

            match order_value(token) {
                Some(value) => {
                    if order.is_some() {
                        return Err(CompileError::malformed(
                            token,
                            "use only one order_by directive",
                        ));
                    }
                    order = Some(value.to_string());
                }
                None => tokens.push(token.to_string()),
            }
        }

        // A group holding only the order_by token vanishes; it carried
        // no filter predicate.
        if !tokens.is_empty() {
            groups.push(tokens);
        }
    }

    Ok(Segments { groups, order })
}

/// Returns the order value when the token's key is exactly `order_by`.
fn order_value(token: &str) -> Option<&str> {
    let (key, value) = token.split_once('=')?;
    if key.trim() == ORDER_KEY {
        Some(value.trim())
    } else {
        None
    }
}
