//! # BinMeta
//!
//! Recover typed C# class definitions from reflected binary property
//! metadata.
//!
//! Classes and fields of the binary property format are known only by the
//! 32-bit FNV-1a hash of their lower-cased names. BinMeta reads a dump of the
//! runtime class registry, recovers names from plaintext dictionaries, and
//! generates one C# class or interface per registry entry, annotated with the
//! name or hash each property serializes under.
//!
//! ## Quick Start
//!
//! ```ignore
//! use binmeta::prelude::*;
//!
//! let schema = parse_schema(&std::fs::read_to_string("meta.json")?)?;
//! let ir = SchemaIr::from_schema(&schema)?;
//! let classes = NameTable::from_dictionary(&std::fs::read_to_string("hashes.bintypes.txt")?)?;
//! let fields = NameTable::from_dictionary(&std::fs::read_to_string("hashes.binfields.txt")?)?;
//!
//! let generator = Generator::new(&ir, &classes, &fields).with_config(GeneratorConfig::current());
//! std::fs::write("classes.cs", Generator::render(&generator.generate()?))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Name hashing and hash-to-name tables
//! - [`schema`] - Class dump parsing, resolution and validation
//! - [`codegen`] - C# generation

pub mod prelude;

/// Name hashing and hash-to-name tables.
pub mod core {
    pub use binmeta_core::*;
}

/// Class dump parsing, resolution and validation.
pub mod schema {
    pub use binmeta_schema::*;
}

/// C# generation from class schemas.
pub mod codegen {
    pub use binmeta_codegen::*;
}

// Re-export commonly used items at the crate root
pub use binmeta_codegen::{
    CodegenError, Generator, GeneratorConfig, Profile, generate_from_files, generate_from_json,
};
pub use binmeta_core::{NameTable, fnv1a_32};
pub use binmeta_schema::{SchemaIr, parse_schema};
