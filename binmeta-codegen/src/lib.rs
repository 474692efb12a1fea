//! # BinMeta Codegen
//!
//! C# class generation from reflected class schemas.
//!
//! This crate provides:
//! - Property type resolution, including containers, maps, links and
//!   optionals
//! - Property naming normalization with `[BINValue]` annotations
//! - Class and interface definition generation with interface flattening
//! - Generator profiles for the current and legacy output shapes

pub mod config;
pub mod csharp;
pub mod error;
pub mod generator;
pub mod names;

pub use config::{GeneratorConfig, Profile};
pub use error::CodegenError;
pub use generator::Generator;
pub use names::NameResolver;

use binmeta_core::NameTable;
use binmeta_schema::SchemaIr;
use std::path::Path;

/// Generates C# definitions from an in-memory class dump and dictionaries.
///
/// # Arguments
/// * `json` - Class dump JSON content
/// * `class_dictionary` - Class name dictionary content
/// * `field_dictionary` - Field name dictionary content
/// * `config` - Generator configuration
///
/// # Returns
/// Every class definition in schema order, one block after the other.
///
/// # Errors
/// Returns `CodegenError` if parsing, dictionary loading, or generation fails.
pub fn generate_from_json(
    json: &str,
    class_dictionary: &str,
    field_dictionary: &str,
    config: GeneratorConfig,
) -> Result<String, CodegenError> {
    let schema = binmeta_schema::parse_schema(json)?;
    let ir = SchemaIr::from_schema(&schema)?;
    let class_names = NameTable::from_dictionary(class_dictionary)?;
    let field_names = NameTable::from_dictionary(field_dictionary)?;

    let generator = Generator::new(&ir, &class_names, &field_names).with_config(config);
    Ok(Generator::render(&generator.generate()?))
}

/// Generates C# definitions from a class dump file and dictionary files.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_files(
    schema: &Path,
    class_dictionary: &Path,
    field_dictionary: &Path,
    config: GeneratorConfig,
) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(schema)?;
    let class_dictionary = std::fs::read_to_string(class_dictionary)?;
    let field_dictionary = std::fs::read_to_string(field_dictionary)?;
    generate_from_json(&json, &class_dictionary, &field_dictionary, config)
}
