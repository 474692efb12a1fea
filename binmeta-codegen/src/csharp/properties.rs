//! Property declaration generation.

use crate::csharp::types::TypeResolver;
use crate::error::CodegenError;
use crate::names::NameResolver;
use binmeta_core::is_fallback_field_name;
use binmeta_schema::ir::{ResolvedClass, ResolvedProperty};
use std::fmt::{self, Write};

/// Serialization key attached to a generated property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Recovered field name, kept verbatim so it hashes back to the key.
    Name(String),
    /// Raw field hash, for fields without a recovered name.
    Hash(u32),
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => {
                f.write_str("[BINValue(\"")?;
                for c in name.chars() {
                    if matches!(c, '"' | '\\') {
                        f.write_char('\\')?;
                    }
                    f.write_char(c)?;
                }
                f.write_str("\")]")
            }
            Self::Hash(hash) => write!(f, "[BINValue({})]", hash),
        }
    }
}

/// One generated property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedProperty {
    /// Serialization key.
    pub annotation: Annotation,
    /// Declared identifier.
    pub identifier: String,
    /// Declaration without visibility, e.g. `float Range { get; set; }`.
    pub declaration: String,
}

/// Generator for property declarations.
#[derive(Debug, Clone, Copy)]
pub struct PropertyEmitter<'a> {
    types: TypeResolver<'a>,
    names: NameResolver<'a>,
}

impl<'a> PropertyEmitter<'a> {
    /// Creates a new property emitter.
    #[must_use]
    pub const fn new(types: TypeResolver<'a>, names: NameResolver<'a>) -> Self {
        Self { types, names }
    }

    /// Generates the properties declared by `class`, in declaration order.
    ///
    /// # Errors
    /// Returns `CodegenError` if a property type refers to an unknown class.
    pub fn emit(&self, class: &ResolvedClass) -> Result<Vec<EmittedProperty>, CodegenError> {
        class
            .properties
            .iter()
            .map(|property| self.emit_property(class.hash, property))
            .collect()
    }

    /// Generates a single property declared by class `owner`.
    fn emit_property(
        &self,
        owner: u32,
        property: &ResolvedProperty,
    ) -> Result<EmittedProperty, CodegenError> {
        let type_name = self.types.resolve(owner, &property.ty)?;
        let name = self.names.field_name(property.hash);

        let (annotation, identifier) = if is_fallback_field_name(&name) {
            (Annotation::Hash(property.hash), name.into_owned())
        } else {
            let identifier = to_identifier(&name);
            (Annotation::Name(name.into_owned()), identifier)
        };

        let declaration = format!("{} {} {{ get; set; }}", type_name, identifier);
        Ok(EmittedProperty {
            annotation,
            identifier,
            declaration,
        })
    }
}

/// Converts a recovered field name to a property identifier.
///
/// A Hungarian `m` prefix before an upper-case letter is dropped; otherwise a
/// lower-case first letter is upper-cased. Anything else is kept as is.
#[must_use]
pub fn to_identifier(name: &str) -> String {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some('m'), Some(second)) if second.is_uppercase() => name['m'.len_utf8()..].to_string(),
        (Some(first), _) if first.is_lowercase() => {
            let mut result = String::with_capacity(name.len());
            result.extend(first.to_uppercase());
            result.push_str(&name[first.len_utf8()..]);
            result
        }
        _ => name.to_string(),
    }
}
