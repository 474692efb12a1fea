//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use binmeta::prelude::*;
//! ```

// Core types
pub use binmeta_core::error::{Error as CoreError, Result as CoreResult};
pub use binmeta_core::{NameTable, fallback_class_name, fallback_field_name, fnv1a_32};

// Schema types
pub use binmeta_schema::{
    ClassDef, ElementType, ParseError, PrimitiveType, PropertyDef, PropertyType, ResolvedClass,
    ResolvedProperty, Schema, SchemaError, SchemaIr, ValueType, parse_schema, parse_schema_file,
    validate_schema,
};

// Codegen types
pub use binmeta_codegen::csharp::{Annotation, ClassEmitter, PropertyEmitter, TypeResolver};
pub use binmeta_codegen::{CodegenError, Generator, GeneratorConfig, NameResolver, Profile};
