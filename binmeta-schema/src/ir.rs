//! Intermediate representation for code generation.
//!
//! This module provides a resolved representation of the schema that is
//! easier to use for code generation: a class table keyed by hash, and
//! property types folded into a tagged union so every consumer matches on a
//! closed set of shapes instead of re-deriving them from raw descriptors.
//!
//! Parent and interface links stay plain hashes resolved through the table,
//! so a malformed schema with cycles cannot create ownership loops.

use crate::error::SchemaError;
use crate::types::{ClassDef, PrimitiveType, PropertyDef, Schema, ValueType};
use std::collections::HashMap;

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone, Default)]
pub struct SchemaIr {
    /// Resolved classes, in schema order.
    pub classes: Vec<ResolvedClass>,
    /// Hash to index lookup.
    index: HashMap<u32, usize>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a parsed schema.
    ///
    /// # Errors
    /// Returns `SchemaError` if two classes share a hash or a property type
    /// cannot be resolved.
    pub fn from_schema(schema: &Schema) -> Result<Self, SchemaError> {
        let mut ir = Self::default();

        for class_def in &schema.classes {
            let resolved = ResolvedClass::from_class_def(class_def)?;
            if ir.index.insert(resolved.hash, ir.classes.len()).is_some() {
                return Err(SchemaError::DuplicateClass {
                    hash: resolved.hash,
                });
            }
            ir.classes.push(resolved);
        }

        tracing::debug!("Resolved {} classes", ir.classes.len());
        Ok(ir)
    }

    /// Gets a resolved class by hash.
    #[must_use]
    pub fn get_class(&self, hash: u32) -> Option<&ResolvedClass> {
        self.index.get(&hash).map(|&idx| &self.classes[idx])
    }

    /// Returns true if a class with the given hash exists.
    #[must_use]
    pub fn contains(&self, hash: u32) -> bool {
        self.index.contains_key(&hash)
    }

    /// Gets the class `referrer` refers to by `hash`.
    ///
    /// # Errors
    /// Returns [`SchemaError::DanglingClassReference`] if no such class exists.
    pub fn referenced_class(&self, referrer: u32, hash: u32) -> Result<&ResolvedClass, SchemaError> {
        self.get_class(hash)
            .ok_or(SchemaError::dangling(referrer, hash))
    }

    /// Returns the number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the schema has no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Computes the flattened interface lineage of `class`.
    ///
    /// The parent is followed first, but only when it is an interface; then
    /// each implemented interface in declaration order. Every interface is
    /// preceded by its own lineage, so ancestors always come before their
    /// descendants. An interface reachable along two paths appears twice.
    ///
    /// # Errors
    /// Returns [`SchemaError::DanglingClassReference`] for an unknown hash and
    /// [`SchemaError::CircularReference`] if the lineage loops.
    pub fn resolve_interfaces<'a>(
        &'a self,
        class: &'a ResolvedClass,
    ) -> Result<Vec<&'a ResolvedClass>, SchemaError> {
        let mut interfaces = Vec::new();
        let mut path = vec![class.hash];
        self.collect_interfaces(class, &mut path, &mut interfaces)?;
        Ok(interfaces)
    }

    fn collect_interfaces<'a>(
        &'a self,
        class: &'a ResolvedClass,
        path: &mut Vec<u32>,
        out: &mut Vec<&'a ResolvedClass>,
    ) -> Result<(), SchemaError> {
        if let Some(parent_hash) = class.parent {
            let parent = self.referenced_class(class.hash, parent_hash)?;
            if parent.is_interface {
                self.visit(parent, path, out)?;
            }
        }

        for &hash in &class.implements {
            let interface = self.referenced_class(class.hash, hash)?;
            self.visit(interface, path, out)?;
        }

        Ok(())
    }

    fn visit<'a>(
        &'a self,
        interface: &'a ResolvedClass,
        path: &mut Vec<u32>,
        out: &mut Vec<&'a ResolvedClass>,
    ) -> Result<(), SchemaError> {
        if let Some(start) = path.iter().position(|&h| h == interface.hash) {
            let mut cycle = path[start..].to_vec();
            cycle.push(interface.hash);
            return Err(SchemaError::circular(&cycle));
        }

        path.push(interface.hash);
        self.collect_interfaces(interface, path, out)?;
        path.pop();

        out.push(interface);
        Ok(())
    }
}

/// Resolved class information.
#[derive(Debug, Clone)]
pub struct ResolvedClass {
    /// Class hash.
    pub hash: u32,
    /// Base class hash, if any.
    pub parent: Option<u32>,
    /// Implemented interface hashes, in declaration order.
    pub implements: Vec<u32>,
    /// Whether this is a pure interface.
    pub is_interface: bool,
    /// Declared properties, in declaration order.
    pub properties: Vec<ResolvedProperty>,
}

impl ResolvedClass {
    /// Creates a resolved class from a class definition.
    ///
    /// # Errors
    /// Returns `SchemaError` if a property type cannot be resolved.
    pub fn from_class_def(class: &ClassDef) -> Result<Self, SchemaError> {
        let properties = class
            .properties
            .iter()
            .map(|p| ResolvedProperty::from_property_def(class.hash, p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            hash: class.hash,
            parent: (class.parent_class != 0).then_some(class.parent_class),
            implements: class.implemented_hashes().collect(),
            is_interface: class.is_interface,
            properties,
        })
    }

    /// Iterates over every class hash this class refers to: parent,
    /// interfaces, then property targets.
    pub fn referenced_hashes(&self) -> impl Iterator<Item = u32> + '_ {
        self.parent
            .into_iter()
            .chain(self.implements.iter().copied())
            .chain(self.properties.iter().filter_map(|p| p.ty.referenced_class()))
    }
}

/// Resolved property information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedProperty {
    /// Property hash.
    pub hash: u32,
    /// Resolved type.
    pub ty: PropertyType,
}

impl ResolvedProperty {
    /// Creates a resolved property from a property definition of `class`.
    ///
    /// # Errors
    /// Returns [`SchemaError::InvalidPropertyType`] if the kind is `None`, a
    /// required descriptor is missing, or a map key is not a scalar.
    pub fn from_property_def(class: u32, property: &PropertyDef) -> Result<Self, SchemaError> {
        let kind = property.value_type;
        let invalid = |reason: &str| SchemaError::invalid_property(class, property.hash, kind, reason);
        let element = |value_type: ValueType| match value_type {
            ValueType::None => Err(invalid("element type is None")),
            other => Ok(ElementType::from_value_type(other, property.other_class)),
        };

        let ty = match kind {
            ValueType::None => return Err(invalid("property has no type")),
            ValueType::Structure => PropertyType::Structure(property.other_class),
            ValueType::Embedded => PropertyType::Embedded(property.other_class),
            ValueType::LinkOffset => PropertyType::Link(property.other_class),
            ValueType::Container => {
                let info = property
                    .container
                    .ok_or_else(|| invalid("missing container descriptor"))?;
                PropertyType::Container(element(info.value_type)?)
            }
            ValueType::OptionalData => {
                let info = property
                    .container
                    .ok_or_else(|| invalid("missing container descriptor"))?;
                PropertyType::Optional(element(info.value_type)?)
            }
            ValueType::Map => {
                let info = property
                    .map
                    .ok_or_else(|| invalid("missing map descriptor"))?;
                let key = info
                    .key
                    .primitive()
                    .ok_or_else(|| invalid("map key is not a scalar"))?;
                PropertyType::Map {
                    key,
                    value: element(info.value)?,
                }
            }
            scalar => match scalar.primitive() {
                Some(primitive) => PropertyType::Primitive(primitive),
                None => return Err(invalid("unhandled value type")),
            },
        };

        Ok(Self {
            hash: property.hash,
            ty,
        })
    }
}

/// Resolved property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    /// Scalar value.
    Primitive(PrimitiveType),
    /// Nested object of the given class.
    Structure(u32),
    /// Inline nested object of the given class.
    Embedded(u32),
    /// Homogeneous sequence.
    Container(ElementType),
    /// Key to value association. Keys are always scalars.
    Map {
        /// Key type.
        key: PrimitiveType,
        /// Value type.
        value: ElementType,
    },
    /// Indirect reference to an object of the given class.
    Link(u32),
    /// Possibly-absent value.
    Optional(ElementType),
}

impl PropertyType {
    /// Returns the class hash this type refers to, if any.
    #[must_use]
    pub const fn referenced_class(&self) -> Option<u32> {
        match self {
            Self::Primitive(_) => None,
            Self::Structure(hash) | Self::Embedded(hash) | Self::Link(hash) => Some(*hash),
            Self::Container(element) | Self::Optional(element) | Self::Map { value: element, .. } => {
                element.class_hash()
            }
        }
    }
}

/// Element type of a container, optional or map value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// Scalar element.
    Primitive(PrimitiveType),
    /// Object of the given class.
    Class(u32),
}

impl ElementType {
    /// Resolves an element kind; non-scalar kinds refer to `other_class`.
    #[must_use]
    pub const fn from_value_type(value_type: ValueType, other_class: u32) -> Self {
        match value_type.primitive() {
            Some(primitive) => Self::Primitive(primitive),
            None => Self::Class(other_class),
        }
    }

    /// Returns the class hash, if this element is an object.
    #[must_use]
    pub const fn class_hash(&self) -> Option<u32> {
        match self {
            Self::Primitive(_) => None,
            Self::Class(hash) => Some(*hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClassDef;

    const A: u32 = 0xA;
    const B: u32 = 0xB;
    const C: u32 = 0xC;
    const D: u32 = 0xD;

    fn ir(classes: Vec<ClassDef>) -> SchemaIr {
        SchemaIr::from_schema(&Schema::new(classes)).expect("Failed to resolve")
    }

    fn hashes(classes: &[&ResolvedClass]) -> Vec<u32> {
        classes.iter().map(|c| c.hash).collect()
    }

    #[test]
    fn test_schema_ir_from_schema() {
        let ir = ir(vec![ClassDef::interface(A), ClassDef::new(B).implementing(A)]);

        assert_eq!(ir.len(), 2);
        assert!(ir.contains(A));
        assert!(!ir.contains(C));
        assert_eq!(ir.get_class(B).map(|c| c.implements.clone()), Some(vec![A]));
        assert_eq!(ir.classes[0].parent, None);
    }

    #[test]
    fn test_duplicate_class() {
        let result = SchemaIr::from_schema(&Schema::new(vec![ClassDef::new(A), ClassDef::new(A)]));
        assert!(matches!(result, Err(SchemaError::DuplicateClass { hash: A })));
    }

    #[test]
    fn test_resolve_transitive_interfaces() {
        let ir = ir(vec![
            ClassDef::interface(A),
            ClassDef::interface(B).implementing(A),
            ClassDef::new(C).implementing(B),
        ]);
        let class = ir.get_class(C).expect("Missing class");

        let interfaces = ir.resolve_interfaces(class).expect("Failed to resolve");
        assert_eq!(hashes(&interfaces), vec![A, B]);
    }

    #[test]
    fn test_resolve_keeps_duplicate_paths() {
        let ir = ir(vec![
            ClassDef::interface(A),
            ClassDef::interface(B).implementing(A),
            ClassDef::new(C).with_parent(B).implementing(A),
        ]);
        let class = ir.get_class(C).expect("Missing class");

        let interfaces = ir.resolve_interfaces(class).expect("Failed to resolve");
        assert_eq!(hashes(&interfaces), vec![A, B, A]);
    }

    #[test]
    fn test_resolve_skips_concrete_parent() {
        let ir = ir(vec![
            ClassDef::interface(A),
            ClassDef::new(B).implementing(A),
            ClassDef::new(C).with_parent(B),
        ]);
        let class = ir.get_class(C).expect("Missing class");

        let interfaces = ir.resolve_interfaces(class).expect("Failed to resolve");
        assert!(interfaces.is_empty());
    }

    #[test]
    fn test_resolve_interface_parent() {
        let ir = ir(vec![
            ClassDef::interface(A),
            ClassDef::interface(B).with_parent(A),
            ClassDef::interface(D),
            ClassDef::new(C).with_parent(B).implementing(D),
        ]);
        let class = ir.get_class(C).expect("Missing class");

        let interfaces = ir.resolve_interfaces(class).expect("Failed to resolve");
        assert_eq!(hashes(&interfaces), vec![A, B, D]);
    }

    #[test]
    fn test_resolve_dangling_reference() {
        let ir = ir(vec![ClassDef::new(C).implementing(A)]);
        let class = ir.get_class(C).expect("Missing class");

        let result = ir.resolve_interfaces(class);
        assert!(matches!(
            result,
            Err(SchemaError::DanglingClassReference {
                class: C,
                referenced: A
            })
        ));
    }

    #[test]
    fn test_resolve_dangling_parent() {
        let ir = ir(vec![ClassDef::new(C).with_parent(B)]);
        let class = ir.get_class(C).expect("Missing class");
        assert!(ir.resolve_interfaces(class).is_err());
    }

    #[test]
    fn test_resolve_circular_reference() {
        let ir = ir(vec![
            ClassDef::interface(A).implementing(B),
            ClassDef::interface(B).implementing(A),
            ClassDef::new(C).implementing(A),
        ]);
        let class = ir.get_class(C).expect("Missing class");

        match ir.resolve_interfaces(class) {
            Err(SchemaError::CircularReference { path }) => {
                assert_eq!(path, "0x0000000a -> 0x0000000b -> 0x0000000a");
            }
            other => panic!("expected circular reference, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_self_reference() {
        let ir = ir(vec![ClassDef::interface(A).implementing(A)]);
        let class = ir.get_class(A).expect("Missing class");
        assert!(matches!(
            ir.resolve_interfaces(class),
            Err(SchemaError::CircularReference { .. })
        ));
    }

    #[test]
    fn test_resolve_property_kinds() {
        let resolve = |p: PropertyDef| ResolvedProperty::from_property_def(C, &p).map(|r| r.ty);

        assert_eq!(
            resolve(PropertyDef::new(1, ValueType::FlagsBoolean)).ok(),
            Some(PropertyType::Primitive(PrimitiveType::FlagsBoolean))
        );
        assert_eq!(
            resolve(PropertyDef::new(1, ValueType::Embedded).with_other_class(A)).ok(),
            Some(PropertyType::Embedded(A))
        );
        assert_eq!(
            resolve(
                PropertyDef::new(1, ValueType::Container)
                    .with_other_class(A)
                    .with_element(ValueType::Structure)
            )
            .ok(),
            Some(PropertyType::Container(ElementType::Class(A)))
        );
        assert_eq!(
            resolve(PropertyDef::new(1, ValueType::OptionalData).with_element(ValueType::Float)).ok(),
            Some(PropertyType::Optional(ElementType::Primitive(PrimitiveType::Float)))
        );
        assert_eq!(
            resolve(
                PropertyDef::new(1, ValueType::Map)
                    .with_other_class(B)
                    .with_map(ValueType::StringHash, ValueType::Embedded)
            )
            .ok(),
            Some(PropertyType::Map {
                key: PrimitiveType::StringHash,
                value: ElementType::Class(B),
            })
        );
    }

    #[test]
    fn test_resolve_invalid_properties() {
        let resolve = |p: PropertyDef| ResolvedProperty::from_property_def(C, &p);

        assert!(resolve(PropertyDef::new(1, ValueType::None)).is_err());
        assert!(resolve(PropertyDef::new(1, ValueType::Container)).is_err());
        assert!(resolve(PropertyDef::new(1, ValueType::Map)).is_err());
        assert!(resolve(PropertyDef::new(1, ValueType::Container).with_element(ValueType::None)).is_err());
        assert!(
            resolve(PropertyDef::new(1, ValueType::Map).with_map(ValueType::Embedded, ValueType::Int32))
                .is_err()
        );
    }

    #[test]
    fn test_referenced_hashes() {
        let class = ResolvedClass::from_class_def(
            &ClassDef::new(C)
                .with_parent(A)
                .implementing(B)
                .with_property(PropertyDef::new(1, ValueType::Int32))
                .with_property(PropertyDef::new(2, ValueType::LinkOffset).with_other_class(D)),
        )
        .expect("Failed to resolve");

        assert_eq!(class.referenced_hashes().collect::<Vec<_>>(), vec![A, B, D]);
    }
}
