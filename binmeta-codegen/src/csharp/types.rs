//! Property type resolution.

use crate::error::CodegenError;
use crate::names::NameResolver;
use binmeta_schema::SchemaError;
use binmeta_schema::ir::{ElementType, PropertyType, SchemaIr};

/// Maps resolved property types to C# type expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    ir: &'a SchemaIr,
    names: NameResolver<'a>,
    wrap_links: bool,
    wrap_optionals: bool,
}

impl<'a> TypeResolver<'a> {
    /// Creates a new type resolver.
    ///
    /// Link and optional types are wrapped in `Link<T>` and `Optional<T>`
    /// unless disabled with [`Self::bare_links`] and [`Self::bare_optionals`].
    #[must_use]
    pub const fn new(ir: &'a SchemaIr, names: NameResolver<'a>) -> Self {
        Self {
            ir,
            names,
            wrap_links: true,
            wrap_optionals: true,
        }
    }

    /// Emits link types as the bare class name.
    #[must_use]
    pub const fn bare_links(mut self, bare: bool) -> Self {
        self.wrap_links = !bare;
        self
    }

    /// Emits optional types as the bare element type.
    #[must_use]
    pub const fn bare_optionals(mut self, bare: bool) -> Self {
        self.wrap_optionals = !bare;
        self
    }

    /// Resolves the type of a property declared by class `owner`.
    ///
    /// # Errors
    /// Returns a dangling class reference error if the type names a class
    /// missing from the schema.
    pub fn resolve(&self, owner: u32, ty: &PropertyType) -> Result<String, CodegenError> {
        let resolved = match ty {
            PropertyType::Primitive(primitive) => primitive.csharp_type().to_string(),
            PropertyType::Structure(hash) | PropertyType::Embedded(hash) => {
                self.class_ref(owner, *hash)?
            }
            PropertyType::Container(element) => {
                format!("List<{}>", self.element(owner, element)?)
            }
            PropertyType::Map { key, value } => {
                format!(
                    "Dictionary<{}, {}>",
                    key.csharp_type(),
                    self.element(owner, value)?
                )
            }
            PropertyType::Link(hash) => {
                let target = self.class_ref(owner, *hash)?;
                if self.wrap_links {
                    format!("Link<{}>", target)
                } else {
                    target
                }
            }
            PropertyType::Optional(element) => {
                let inner = self.element(owner, element)?;
                if self.wrap_optionals {
                    format!("Optional<{}>", inner)
                } else {
                    inner
                }
            }
        };

        Ok(resolved)
    }

    fn element(&self, owner: u32, element: &ElementType) -> Result<String, CodegenError> {
        match element {
            ElementType::Primitive(primitive) => Ok(primitive.csharp_type().to_string()),
            ElementType::Class(hash) => self.class_ref(owner, *hash),
        }
    }

    fn class_ref(&self, owner: u32, hash: u32) -> Result<String, CodegenError> {
        if !self.ir.contains(hash) {
            return Err(SchemaError::dangling(owner, hash).into());
        }
        Ok(self.names.class_name(hash).into_owned())
    }
}
