//! Schema-wide class generation.

use crate::config::GeneratorConfig;
use crate::csharp::ClassEmitter;
use crate::error::CodegenError;
use crate::names::NameResolver;
use binmeta_core::NameTable;
use binmeta_schema::ir::{ResolvedClass, SchemaIr};
use binmeta_schema::validation::check_references;
use std::borrow::Cow;

/// Generates one C# definition per class of a schema.
///
/// Classes are independent of each other: each block depends only on the
/// shared, read-only schema and name tables.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    names: NameResolver<'a>,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, class_names: &'a NameTable, field_names: &'a NameTable) -> Self {
        Self {
            ir,
            names: NameResolver::new(class_names, field_names),
            config: GeneratorConfig::default(),
        }
    }

    /// Sets the generator configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the name a class is generated under.
    #[must_use]
    pub fn class_name(&self, hash: u32) -> Cow<'a, str> {
        self.names.class_name(hash)
    }

    /// Generates the definition of a single class.
    ///
    /// # Errors
    /// Returns `CodegenError` if the class refers to a class missing from the
    /// schema, or its interface lineage is circular.
    pub fn generate_class(&self, class: &ResolvedClass) -> Result<String, CodegenError> {
        check_references(self.ir, class)?;

        let interfaces = if self.config.merges_interfaces() {
            self.ir.resolve_interfaces(class)?
        } else {
            Vec::new()
        };

        ClassEmitter::new(self.ir, self.names, self.config).emit(class, &interfaces)
    }

    /// Generates every class in schema order, one result per class.
    pub fn generate_each(
        &self,
    ) -> impl Iterator<Item = (&'a ResolvedClass, Result<String, CodegenError>)> + '_ {
        self.ir
            .classes
            .iter()
            .map(move |class| (class, self.generate_class(class)))
    }

    /// Generates every class in schema order.
    ///
    /// # Errors
    /// Returns the first class error; nothing is produced in that case.
    pub fn generate(&self) -> Result<Vec<String>, CodegenError> {
        let blocks = self
            .generate_each()
            .map(|(_, result)| result)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!("Generated {} class definitions", blocks.len());
        Ok(blocks)
    }

    /// Joins generated blocks into a single document, one block per line
    /// group, each terminated by a newline.
    #[must_use]
    pub fn render(blocks: &[String]) -> String {
        let mut output = String::with_capacity(blocks.iter().map(|b| b.len() + 1).sum());
        for block in blocks {
            output.push_str(block);
            output.push('\n');
        }
        output
    }
}
