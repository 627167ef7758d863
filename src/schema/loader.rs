//! Schema loading from JSON declarations.
//!
//! Declarations look like:
//!
//! ```json
//! {
//!   "fields": {
//!     "salary_from": { "type": "int", "operators": ["eq", "gt", "between"] },
//!     "category": { "type": "enum", "variants": ["Finance", "IT"],
//!                   "operators": ["eq", "in_"] },
//!     "company.title": { "type": "text", "operators": ["eq"] }
//!   }
//! }
//! ```
//!
//! Operator and type spellings are the query-language spellings. Every
//! loaded schema is structurally validated before it is returned; a
//! declaration that parses but is inconsistent never reaches a compiler.

use std::fs;
use std::path::Path;

use super::errors::{SchemaError, SchemaResult};
use super::types::FilterSchema;

/// Parse and validate a schema declaration from a JSON string.
pub fn parse_json(content: &str) -> SchemaResult<FilterSchema> {
    let schema: FilterSchema =
        serde_json::from_str(content).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;
    schema.validate_structure()?;
    Ok(schema)
}

/// Load and validate a schema declaration from a JSON file.
pub fn load_file(path: &Path) -> SchemaResult<FilterSchema> {
    let content = fs::read_to_string(path)
        .map_err(|e| SchemaError::file_unreadable(path.display().to_string(), e.to_string()))?;
    parse_json(&content)
}
