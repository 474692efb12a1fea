//! # BinMeta Schema
//!
//! Reflected class schema reader and type definitions.
//!
//! This crate provides:
//! - JSON parsing of class registry dumps
//! - Raw records for classes, properties and their descriptors
//! - The value-type enumeration of the binary property format
//! - Intermediate representation for code generation, including interface
//!   lineage resolution
//! - Schema validation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{ElementType, PropertyType, ResolvedClass, ResolvedProperty, SchemaIr};
pub use parser::{parse_schema, parse_schema_file};
pub use types::{
    ClassDef, ContainerInfo, InterfaceRef, MapInfo, PrimitiveType, PropertyDef, Schema, ValueType,
};
pub use validation::{check_references, validate_class, validate_schema};
