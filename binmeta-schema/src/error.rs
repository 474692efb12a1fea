//! Error types for schema parsing and validation.

use crate::types::ValueType;
use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown value type code or name.
    #[error("unknown value type '{value}'")]
    UnknownValueType {
        /// Offending code or name.
        value: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema resolution and validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A class refers to a hash missing from the class table.
    #[error("dangling class reference: class {class:#010x} refers to unknown class {referenced:#010x}")]
    DanglingClassReference {
        /// Referring class hash.
        class: u32,
        /// Missing class hash.
        referenced: u32,
    },

    /// Interface lineage loops back on itself.
    #[error("circular interface reference detected: {path}")]
    CircularReference {
        /// Path of the circular reference.
        path: String,
    },

    /// Two classes share the same hash.
    #[error("duplicate class definition: {hash:#010x}")]
    DuplicateClass {
        /// Duplicated hash.
        hash: u32,
    },

    /// Property kind or descriptors cannot be resolved.
    #[error("invalid type {kind} for property {property:#010x} of class {class:#010x}: {reason}")]
    InvalidPropertyType {
        /// Owning class hash.
        class: u32,
        /// Property hash.
        property: u32,
        /// Declared kind.
        kind: ValueType,
        /// What is wrong with it.
        reason: String,
    },
}

impl ParseError {
    /// Creates an unknown value type error.
    pub fn unknown_value_type(value: impl ToString) -> Self {
        Self::UnknownValueType {
            value: value.to_string(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a dangling class reference error.
    #[must_use]
    pub const fn dangling(class: u32, referenced: u32) -> Self {
        Self::DanglingClassReference { class, referenced }
    }

    /// Creates a circular reference error from the hashes on the loop.
    #[must_use]
    pub fn circular(path: &[u32]) -> Self {
        let path = path
            .iter()
            .map(|hash| format!("{hash:#010x}"))
            .collect::<Vec<_>>()
            .join(" -> ");
        Self::CircularReference { path }
    }

    /// Creates an invalid property type error.
    pub fn invalid_property(
        class: u32,
        property: u32,
        kind: ValueType,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidPropertyType {
            class,
            property,
            kind,
            reason: reason.into(),
        }
    }
}
