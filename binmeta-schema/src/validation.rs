//! Schema validation utilities.
//!
//! The generator only needs a class's own references and its interface
//! lineage to be sound, so validation is available per class as well as for
//! the whole schema.

use crate::error::SchemaError;
use crate::ir::{ResolvedClass, SchemaIr};

/// Validates every class of the schema.
///
/// # Errors
/// Returns the first `SchemaError` found, in schema order.
pub fn validate_schema(ir: &SchemaIr) -> Result<(), SchemaError> {
    for class in &ir.classes {
        validate_class(ir, class)?;
    }
    Ok(())
}

/// Validates a single class.
///
/// Checks that the parent, every implemented interface and every class a
/// property refers to exist, and that the interface lineage has no cycles.
///
/// # Errors
/// Returns [`SchemaError::DanglingClassReference`] or
/// [`SchemaError::CircularReference`].
pub fn validate_class(ir: &SchemaIr, class: &ResolvedClass) -> Result<(), SchemaError> {
    check_references(ir, class)?;
    ir.resolve_interfaces(class)?;
    Ok(())
}

/// Checks that every class `class` refers to directly exists.
///
/// # Errors
/// Returns [`SchemaError::DanglingClassReference`] for the first missing hash.
pub fn check_references(ir: &SchemaIr, class: &ResolvedClass) -> Result<(), SchemaError> {
    for hash in class.referenced_hashes() {
        ir.referenced_class(class.hash, hash)?;
    }
    Ok(())
}
