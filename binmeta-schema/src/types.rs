//! Schema type definitions.
//!
//! This module contains the raw records of a reflected class dump, exactly as
//! they appear in the JSON document: the root object, classes, properties and
//! their container/map descriptors, plus the value-type enumeration.

use crate::error::ParseError;
use serde::Deserialize;

/// Complete reflected class dump.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Image base the dump was taken against.
    #[serde(default)]
    pub base: i64,
    /// Offset of the class registry within the image.
    #[serde(default)]
    pub offset: i64,
    /// Class definitions, in dump order.
    #[serde(default)]
    pub classes: Vec<ClassDef>,
}

impl Schema {
    /// Creates a schema from a list of classes.
    #[must_use]
    pub fn new(classes: Vec<ClassDef>) -> Self {
        Self {
            base: 0,
            offset: 0,
            classes,
        }
    }
}

/// One reflected class or interface.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDef {
    /// Hash of the class name.
    pub hash: u32,
    /// Hash of the base class (0 = none).
    #[serde(default)]
    pub parent_class: u32,
    /// Implemented interfaces, in declaration order.
    #[serde(default)]
    pub implements: Vec<InterfaceRef>,
    /// Classes implementing this one.
    #[serde(default)]
    pub implemented_by: Vec<InterfaceRef>,
    /// Whether this is a pure interface.
    #[serde(default)]
    pub is_interface: bool,
    /// Whether this is a value type.
    #[serde(default)]
    pub is_value: bool,
    /// Unidentified flag.
    #[serde(default)]
    pub is_unk0: bool,
    /// Unidentified flag.
    #[serde(default)]
    pub is_unk3: bool,
    /// Declared properties, in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    /// Instance size in bytes.
    #[serde(default)]
    pub class_size: i64,
    /// Unidentified size.
    #[serde(default)]
    pub unk_size: i64,
    /// Virtual table address.
    #[serde(default)]
    pub vtable: i64,
    /// Constructor address.
    #[serde(default)]
    pub constructor: i64,
    /// Destructor address.
    #[serde(default)]
    pub destructor: i64,
    /// In-place constructor address.
    #[serde(default)]
    pub inplaceconstructor: i64,
    /// In-place destructor address.
    #[serde(default)]
    pub inplacedestructor: i64,
    /// Init function address.
    #[serde(default)]
    pub initfunction: i64,
}

impl ClassDef {
    /// Creates a concrete class with no parent, interfaces or properties.
    #[must_use]
    pub fn new(hash: u32) -> Self {
        Self {
            hash,
            ..Self::default()
        }
    }

    /// Creates an interface with no parent, interfaces or properties.
    #[must_use]
    pub fn interface(hash: u32) -> Self {
        Self {
            hash,
            is_interface: true,
            ..Self::default()
        }
    }

    /// Sets the parent class hash.
    #[must_use]
    pub fn with_parent(mut self, parent: u32) -> Self {
        self.parent_class = parent;
        self
    }

    /// Appends an implemented interface.
    #[must_use]
    pub fn implementing(mut self, interface: u32) -> Self {
        self.implements.push(InterfaceRef::new(interface));
        self
    }

    /// Appends a property.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    /// Returns the implemented interface hashes, in declaration order.
    pub fn implemented_hashes(&self) -> impl Iterator<Item = u32> + '_ {
        self.implements.iter().map(|i| i.hash)
    }
}

/// Entry of an `implements` list.
///
/// Serialized as an array whose first element is the interface hash; the
/// remaining elements are auxiliary data kept but never consulted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<u32>")]
pub struct InterfaceRef {
    /// Interface hash.
    pub hash: u32,
    /// Auxiliary values following the hash.
    pub aux: Vec<u32>,
}

impl InterfaceRef {
    /// Creates a reference with no auxiliary data.
    #[must_use]
    pub fn new(hash: u32) -> Self {
        Self {
            hash,
            aux: Vec::new(),
        }
    }
}

impl TryFrom<Vec<u32>> for InterfaceRef {
    type Error = ParseError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        let (&hash, aux) = values
            .split_first()
            .ok_or_else(|| ParseError::invalid_structure("empty interface entry"))?;
        Ok(Self {
            hash,
            aux: aux.to_vec(),
        })
    }
}

/// One reflected property.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    /// Hash of the property name.
    pub hash: u32,
    /// Value type of the property.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Referenced class hash, for structure, embedded, link and non-primitive
    /// element kinds.
    #[serde(default)]
    pub other_class: u32,
    /// Element descriptor for containers and optionals.
    #[serde(default, rename = "containerI")]
    pub container: Option<ContainerInfo>,
    /// Key/value descriptor for maps.
    #[serde(default, rename = "mapI")]
    pub map: Option<MapInfo>,
    /// Byte offset of the property within its class.
    #[serde(default)]
    pub offset: i64,
    /// Bit mask for flag properties.
    #[serde(default)]
    pub bitmask: i64,
}

impl PropertyDef {
    /// Creates a property of the given kind with no descriptors.
    #[must_use]
    pub fn new(hash: u32, value_type: ValueType) -> Self {
        Self {
            hash,
            value_type,
            other_class: 0,
            container: None,
            map: None,
            offset: 0,
            bitmask: 0,
        }
    }

    /// Sets the referenced class hash.
    #[must_use]
    pub fn with_other_class(mut self, other_class: u32) -> Self {
        self.other_class = other_class;
        self
    }

    /// Sets the element descriptor.
    #[must_use]
    pub fn with_element(mut self, element: ValueType) -> Self {
        self.container = Some(ContainerInfo::new(element));
        self
    }

    /// Sets the key/value descriptor.
    #[must_use]
    pub fn with_map(mut self, key: ValueType, value: ValueType) -> Self {
        self.map = Some(MapInfo::new(key, value));
        self
    }
}

/// Container and optional element descriptor.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInfo {
    /// Element value type.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Element size in bytes.
    #[serde(default)]
    pub elem_size: i64,
    /// Container virtual table address.
    #[serde(default)]
    pub vtable: i64,
}

impl ContainerInfo {
    /// Creates a descriptor for the given element type.
    #[must_use]
    pub const fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            elem_size: 0,
            vtable: 0,
        }
    }
}

/// Map key/value descriptor.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MapInfo {
    /// Key value type.
    pub key: ValueType,
    /// Value value type.
    pub value: ValueType,
    /// Map virtual table address.
    #[serde(default)]
    pub vtable: i64,
}

impl MapInfo {
    /// Creates a descriptor for the given key and value types.
    #[must_use]
    pub const fn new(key: ValueType, value: ValueType) -> Self {
        Self {
            key,
            value,
            vtable: 0,
        }
    }
}

/// Value type of a property, with its numeric code in the binary format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "ValueTypeRepr")]
#[repr(u8)]
pub enum ValueType {
    /// No type.
    None = 0,
    /// Boolean.
    Boolean = 1,
    /// Signed 8-bit integer.
    SByte = 2,
    /// Unsigned 8-bit integer.
    Byte = 3,
    /// Signed 16-bit integer.
    Int16 = 4,
    /// Unsigned 16-bit integer.
    UInt16 = 5,
    /// Signed 32-bit integer.
    Int32 = 6,
    /// Unsigned 32-bit integer.
    UInt32 = 7,
    /// Signed 64-bit integer.
    Int64 = 8,
    /// Unsigned 64-bit integer.
    UInt64 = 9,
    /// 32-bit float.
    Float = 10,
    /// Two-component float vector.
    FloatVector2 = 11,
    /// Three-component float vector.
    FloatVector3 = 12,
    /// Four-component float vector.
    FloatVector4 = 13,
    /// 4x4 float matrix.
    Matrix44 = 14,
    /// RGBA color packed in four bytes.
    Color = 15,
    /// String.
    String = 16,
    /// Hash of a string.
    StringHash = 17,
    /// Homogeneous sequence.
    Container = 18,
    /// Nested object.
    Structure = 19,
    /// Inline nested object.
    Embedded = 20,
    /// Indirect reference to another object.
    LinkOffset = 21,
    /// Possibly-absent value.
    OptionalData = 22,
    /// Key to value association.
    Map = 23,
    /// Single bit of a flags word.
    FlagsBoolean = 24,
}

impl ValueType {
    const ALL: [Self; 25] = [
        Self::None,
        Self::Boolean,
        Self::SByte,
        Self::Byte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Float,
        Self::FloatVector2,
        Self::FloatVector3,
        Self::FloatVector4,
        Self::Matrix44,
        Self::Color,
        Self::String,
        Self::StringHash,
        Self::Container,
        Self::Structure,
        Self::Embedded,
        Self::LinkOffset,
        Self::OptionalData,
        Self::Map,
        Self::FlagsBoolean,
    ];

    /// Returns every value type, ordered by code.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parses a value type from its numeric code.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Returns the variant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Boolean => "Boolean",
            Self::SByte => "SByte",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Float => "Float",
            Self::FloatVector2 => "FloatVector2",
            Self::FloatVector3 => "FloatVector3",
            Self::FloatVector4 => "FloatVector4",
            Self::Matrix44 => "Matrix44",
            Self::Color => "Color",
            Self::String => "String",
            Self::StringHash => "StringHash",
            Self::Container => "Container",
            Self::Structure => "Structure",
            Self::Embedded => "Embedded",
            Self::LinkOffset => "LinkOffset",
            Self::OptionalData => "OptionalData",
            Self::Map => "Map",
            Self::FlagsBoolean => "FlagsBoolean",
        }
    }

    /// Parses a value type from its variant name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }

    /// Returns true if this kind nests other kinds or references a class.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(
            self,
            Self::Container
                | Self::Structure
                | Self::Embedded
                | Self::LinkOffset
                | Self::OptionalData
                | Self::Map
        )
    }

    /// Returns the scalar kind, if this is one.
    #[must_use]
    pub const fn primitive(self) -> Option<PrimitiveType> {
        match self {
            Self::Boolean => Some(PrimitiveType::Boolean),
            Self::SByte => Some(PrimitiveType::SByte),
            Self::Byte => Some(PrimitiveType::Byte),
            Self::Int16 => Some(PrimitiveType::Int16),
            Self::UInt16 => Some(PrimitiveType::UInt16),
            Self::Int32 => Some(PrimitiveType::Int32),
            Self::UInt32 => Some(PrimitiveType::UInt32),
            Self::Int64 => Some(PrimitiveType::Int64),
            Self::UInt64 => Some(PrimitiveType::UInt64),
            Self::Float => Some(PrimitiveType::Float),
            Self::FloatVector2 => Some(PrimitiveType::FloatVector2),
            Self::FloatVector3 => Some(PrimitiveType::FloatVector3),
            Self::FloatVector4 => Some(PrimitiveType::FloatVector4),
            Self::Matrix44 => Some(PrimitiveType::Matrix44),
            Self::Color => Some(PrimitiveType::Color),
            Self::String => Some(PrimitiveType::String),
            Self::StringHash => Some(PrimitiveType::StringHash),
            Self::FlagsBoolean => Some(PrimitiveType::FlagsBoolean),
            Self::None
            | Self::Container
            | Self::Structure
            | Self::Embedded
            | Self::LinkOffset
            | Self::OptionalData
            | Self::Map => None,
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Wire representation of a value type: numeric code or variant name.
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueTypeRepr {
    Code(u32),
    Name(String),
}

impl TryFrom<ValueTypeRepr> for ValueType {
    type Error = ParseError;

    fn try_from(repr: ValueTypeRepr) -> Result<Self, Self::Error> {
        match repr {
            ValueTypeRepr::Code(code) => {
                Self::from_code(code).ok_or_else(|| ParseError::unknown_value_type(code))
            }
            ValueTypeRepr::Name(name) => {
                Self::from_name(&name).ok_or_else(|| ParseError::unknown_value_type(name))
            }
        }
    }
}

/// Scalar value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Boolean.
    Boolean,
    /// Signed 8-bit integer.
    SByte,
    /// Unsigned 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// 32-bit float.
    Float,
    /// Two-component float vector.
    FloatVector2,
    /// Three-component float vector.
    FloatVector3,
    /// Four-component float vector.
    FloatVector4,
    /// 4x4 float matrix.
    Matrix44,
    /// RGBA color packed in four bytes.
    Color,
    /// String.
    String,
    /// Hash of a string.
    StringHash,
    /// Single bit of a flags word.
    FlagsBoolean,
}

impl PrimitiveType {
    /// Every scalar kind.
    pub const ALL: [Self; 18] = [
        Self::Boolean,
        Self::SByte,
        Self::Byte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Float,
        Self::FloatVector2,
        Self::FloatVector3,
        Self::FloatVector4,
        Self::Matrix44,
        Self::Color,
        Self::String,
        Self::StringHash,
        Self::FlagsBoolean,
    ];

    /// Returns the C# type name for this primitive.
    #[must_use]
    pub const fn csharp_type(&self) -> &'static str {
        match self {
            Self::Boolean | Self::FlagsBoolean => "bool",
            Self::SByte => "sbyte",
            Self::Byte => "byte",
            Self::Int16 => "short",
            Self::UInt16 => "ushort",
            Self::Int32 => "int",
            Self::UInt32 => "uint",
            Self::Int64 => "long",
            Self::UInt64 => "ulong",
            Self::Float => "float",
            Self::FloatVector2 => "Vector2",
            Self::FloatVector3 => "Vector3",
            Self::FloatVector4 => "Vector4",
            Self::Matrix44 => "R3DMatrix44",
            Self::Color => "ColorRGBAVector4Byte",
            Self::String => "string",
            Self::StringHash => "Hash",
        }
    }

    /// Returns the value type this primitive is encoded as.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Boolean => ValueType::Boolean,
            Self::SByte => ValueType::SByte,
            Self::Byte => ValueType::Byte,
            Self::Int16 => ValueType::Int16,
            Self::UInt16 => ValueType::UInt16,
            Self::Int32 => ValueType::Int32,
            Self::UInt32 => ValueType::UInt32,
            Self::Int64 => ValueType::Int64,
            Self::UInt64 => ValueType::UInt64,
            Self::Float => ValueType::Float,
            Self::FloatVector2 => ValueType::FloatVector2,
            Self::FloatVector3 => ValueType::FloatVector3,
            Self::FloatVector4 => ValueType::FloatVector4,
            Self::Matrix44 => ValueType::Matrix44,
            Self::Color => ValueType::Color,
            Self::String => ValueType::String,
            Self::StringHash => ValueType::StringHash,
            Self::FlagsBoolean => ValueType::FlagsBoolean,
        }
    }
}
