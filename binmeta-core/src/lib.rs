//! # BinMeta Core
//!
//! Core primitives shared by the schema reader and the class generator.
//!
//! This crate provides:
//! - The case-insensitive 32-bit FNV-1a hash used as the identity of every
//!   class and field in the binary property format
//! - Hash-to-name tables built from plaintext dictionaries
//! - Synthetic fallback names for hashes no dictionary recovers
//! - Error types for dictionary loading

pub mod error;
pub mod hash;
pub mod names;

pub use error::{Error, Result};
pub use hash::{FNV_OFFSET_BASIS, FNV_PRIME, fnv1a_32, fnv1a_32_raw};
pub use names::{NameTable, fallback_class_name, fallback_field_name, is_fallback_field_name};
