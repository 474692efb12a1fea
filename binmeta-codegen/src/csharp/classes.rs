//! Class and interface code generation.

use crate::config::GeneratorConfig;
use crate::csharp::properties::{EmittedProperty, PropertyEmitter};
use crate::csharp::types::TypeResolver;
use crate::error::CodegenError;
use crate::names::NameResolver;
use binmeta_schema::ir::{ResolvedClass, SchemaIr};

/// Generator for class and interface definitions.
#[derive(Debug, Clone, Copy)]
pub struct ClassEmitter<'a> {
    names: NameResolver<'a>,
    properties: PropertyEmitter<'a>,
    config: GeneratorConfig,
}

impl<'a> ClassEmitter<'a> {
    /// Creates a new class emitter.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, names: NameResolver<'a>, config: GeneratorConfig) -> Self {
        let types = TypeResolver::new(ir, names)
            .bare_links(!config.wraps_links())
            .bare_optionals(!config.wraps_optionals());
        Self {
            names,
            properties: PropertyEmitter::new(types, names),
            config,
        }
    }

    /// Generates the definition of `class`.
    ///
    /// `interfaces` is the flattened interface lineage of the class. When
    /// interface merging is enabled and the class is concrete, the properties
    /// of every interface are declared first, in lineage order, followed by
    /// the class's own properties.
    ///
    /// # Errors
    /// Returns `CodegenError` if a property type refers to an unknown class.
    pub fn emit(
        &self,
        class: &ResolvedClass,
        interfaces: &[&ResolvedClass],
    ) -> Result<String, CodegenError> {
        let mut properties = Vec::new();
        if self.config.merges_interfaces() && !class.is_interface {
            for interface in interfaces {
                properties.extend(self.properties.emit(interface)?);
            }
        }
        properties.extend(self.properties.emit(class)?);

        let name = self.names.class_name(class.hash);
        let mut output = String::new();

        output.push_str(&self.generate_header(class, &name));
        output.push_str("\n{\n");

        for property in &properties {
            output.push_str(&self.generate_property(class, property));
        }

        if !class.is_interface {
            output.push('\n');
            output.push_str(&format!("    public {}()\n", name));
            output.push_str("    {\n");
            output.push('\n');
            output.push_str("    }\n");
        }

        output.push('}');

        tracing::debug!(
            "Generated {} {} with {} properties",
            if class.is_interface { "interface" } else { "class" },
            name,
            properties.len()
        );

        Ok(output)
    }

    /// Generates the declaration line, e.g. `public class Spell : Base, IFoo`.
    fn generate_header(&self, class: &ResolvedClass, name: &str) -> String {
        let kind = if class.is_interface { "interface" } else { "class" };
        let mut header = format!("public {} {}", kind, name);

        let bases: Vec<String> = class
            .parent
            .into_iter()
            .chain(class.implements.iter().copied())
            .map(|hash| self.names.class_name(hash).into_owned())
            .collect();

        if !bases.is_empty() {
            header.push_str(" : ");
            header.push_str(&bases.join(", "));
        }

        header
    }

    /// Generates one property line.
    fn generate_property(&self, class: &ResolvedClass, property: &EmittedProperty) -> String {
        let mut line = String::from("    ");

        if self.config.emits_annotations() {
            line.push_str(&property.annotation.to_string());
            line.push(' ');
        }

        if !class.is_interface {
            line.push_str("public ");
        }

        line.push_str(&property.declaration);
        line.push('\n');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binmeta_core::{NameTable, fnv1a_32};
    use binmeta_schema::types::{ClassDef, PropertyDef, Schema, ValueType};

    struct Fixture {
        ir: SchemaIr,
        classes: NameTable,
        fields: NameTable,
    }

    impl Fixture {
        fn new(classes: Vec<ClassDef>) -> Self {
            Self {
                ir: SchemaIr::from_schema(&Schema::new(classes)).expect("Failed to resolve"),
                classes: ["Ability", "Spell", "Base", "Target"].into_iter().collect(),
                fields: ["mIsValid", "mRange", "mTarget"].into_iter().collect(),
            }
        }

        fn emit(&self, hash: u32, config: GeneratorConfig) -> String {
            let class = self.ir.get_class(hash).expect("Missing class");
            let interfaces = self.ir.resolve_interfaces(class).expect("Failed to resolve");
            ClassEmitter::new(&self.ir, NameResolver::new(&self.classes, &self.fields), config)
                .emit(class, &interfaces)
                .expect("Failed to emit")
        }
    }

    fn h(name: &str) -> u32 {
        fnv1a_32(name)
    }

    fn spell_schema() -> Vec<ClassDef> {
        vec![
            ClassDef::interface(h("Ability"))
                .with_property(PropertyDef::new(h("mIsValid"), ValueType::Boolean)),
            ClassDef::new(h("Spell"))
                .implementing(h("Ability"))
                .with_property(PropertyDef::new(h("mRange"), ValueType::Float)),
        ]
    }

    #[test]
    fn test_emit_interface() {
        let fixture = Fixture::new(spell_schema());
        let output = fixture.emit(h("Ability"), GeneratorConfig::current());

        assert_eq!(
            output,
            "public interface Ability\n\
             {\n    \
             [BINValue(\"mIsValid\")] bool IsValid { get; set; }\n\
             }"
        );
    }

    #[test]
    fn test_emit_class_merges_interfaces() {
        let fixture = Fixture::new(spell_schema());
        let output = fixture.emit(h("Spell"), GeneratorConfig::current());

        assert_eq!(
            output,
            "public class Spell : Ability\n\
             {\n    \
             [BINValue(\"mIsValid\")] public bool IsValid { get; set; }\n    \
             [BINValue(\"mRange\")] public float Range { get; set; }\n\
             \n    \
             public Spell()\n    \
             {\n\
             \n    \
             }\n\
             }"
        );
    }

    #[test]
    fn test_emit_legacy_profile() {
        let mut schema = spell_schema();
        schema.push(ClassDef::new(h("Target")));
        schema[1] = schema[1].clone().with_property(
            PropertyDef::new(h("mTarget"), ValueType::LinkOffset).with_other_class(h("Target")),
        );
        let fixture = Fixture::new(schema);
        let output = fixture.emit(h("Spell"), GeneratorConfig::legacy());

        assert_eq!(
            output,
            "public class Spell : Ability\n\
             {\n    \
             public float Range { get; set; }\n    \
             public Target Target { get; set; }\n\
             \n    \
             public Spell()\n    \
             {\n\
             \n    \
             }\n\
             }"
        );
    }

    #[test]
    fn test_emit_header_parent_and_interfaces() {
        let fixture = Fixture::new(vec![
            ClassDef::new(h("Base")),
            ClassDef::interface(h("Ability")),
            ClassDef::interface(77),
            ClassDef::new(h("Spell"))
                .with_parent(h("Base"))
                .implementing(h("Ability"))
                .implementing(77),
        ]);
        let output = fixture.emit(h("Spell"), GeneratorConfig::current());

        assert!(output.starts_with("public class Spell : Base, Ability, Class_77\n{\n"));
    }

    #[test]
    fn test_emit_interface_does_not_merge() {
        let fixture = Fixture::new(vec![
            ClassDef::interface(h("Base"))
                .with_property(PropertyDef::new(h("mRange"), ValueType::Float)),
            ClassDef::interface(h("Ability"))
                .implementing(h("Base"))
                .with_property(PropertyDef::new(h("mIsValid"), ValueType::Boolean)),
        ]);
        let output = fixture.emit(h("Ability"), GeneratorConfig::current());

        assert!(output.starts_with("public interface Ability : Base\n"));
        assert!(output.contains("bool IsValid"));
        assert!(!output.contains("Range"));
        assert!(!output.contains("public Ability()"));
    }

    #[test]
    fn test_emit_duplicate_interface_paths() {
        let fixture = Fixture::new(vec![
            ClassDef::interface(h("Ability"))
                .with_property(PropertyDef::new(h("mIsValid"), ValueType::Boolean)),
            ClassDef::interface(h("Base")).implementing(h("Ability")),
            ClassDef::new(h("Spell"))
                .with_parent(h("Base"))
                .implementing(h("Ability")),
        ]);
        let output = fixture.emit(h("Spell"), GeneratorConfig::current());

        assert_eq!(output.matches("public bool IsValid").count(), 2);
    }

    #[test]
    fn test_emit_empty_class() {
        let fixture = Fixture::new(vec![ClassDef::new(5)]);
        let output = fixture.emit(5, GeneratorConfig::current());

        assert_eq!(
            output,
            "public class Class_5\n{\n\n    public Class_5()\n    {\n\n    }\n}"
        );
    }
}
