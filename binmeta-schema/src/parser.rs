//! Reflected class dump parser.
//!
//! This module parses the JSON document produced by the class registry dumper
//! into the raw schema records of [`crate::types`].

use crate::error::ParseError;
use crate::types::Schema;
use std::path::Path;

/// Parses a class dump from a JSON string.
///
/// # Arguments
/// * `json` - JSON document content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a value type is unknown.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    let schema: Schema = serde_json::from_str(json)?;
    tracing::info!("Parsed schema with {} classes", schema.classes.len());
    Ok(schema)
}

/// Parses a class dump from a JSON file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_schema_file(path: &Path) -> Result<Schema, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json)
}
