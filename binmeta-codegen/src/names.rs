//! Name recovery with synthetic fallbacks.

use binmeta_core::NameTable;
use binmeta_core::names::{fallback_class_name, fallback_field_name};
use std::borrow::Cow;

/// Looks up class and field names, substituting a synthetic name for any
/// hash the dictionaries do not recover.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    classes: &'a NameTable,
    fields: &'a NameTable,
}

impl<'a> NameResolver<'a> {
    /// Creates a resolver over the class and field tables.
    #[must_use]
    pub const fn new(classes: &'a NameTable, fields: &'a NameTable) -> Self {
        Self { classes, fields }
    }

    /// Returns the recovered class name, or `Class_<hash>`.
    #[must_use]
    pub fn class_name(&self, hash: u32) -> Cow<'a, str> {
        self.classes
            .lookup(hash)
            .map_or_else(|| Cow::Owned(fallback_class_name(hash)), Cow::Borrowed)
    }

    /// Returns the recovered field name, or `m<hash>`.
    #[must_use]
    pub fn field_name(&self, hash: u32) -> Cow<'a, str> {
        self.fields
            .lookup(hash)
            .map_or_else(|| Cow::Owned(fallback_field_name(hash)), Cow::Borrowed)
    }
}
