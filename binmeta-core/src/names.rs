//! Hash-to-name recovery tables.
//!
//! A [`NameTable`] maps a 32-bit hash back to the human-readable name that
//! produced it. Tables are built from line-oriented dictionaries where each
//! line reads `<opaque-token> <name>`; the token is ignored and the name is
//! hashed to find its slot.

use crate::error::{Error, Result};
use crate::hash::fnv1a_32;
use std::collections::HashMap;

/// Prefix of the synthetic name given to classes no dictionary recovers.
pub const CLASS_FALLBACK_PREFIX: &str = "Class_";

/// Prefix of the synthetic name given to fields no dictionary recovers.
pub const FIELD_FALLBACK_PREFIX: &str = "m";

/// Mapping from hash to recovered name.
///
/// Holds at most one name per hash. Inserting a second name with the same
/// hash replaces the first; collisions are not detected.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: HashMap<u32, String>,
}

impl NameTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from dictionary text.
    ///
    /// Every line is split on whitespace and its second field is taken as
    /// the candidate name. Blank lines are skipped.
    ///
    /// # Errors
    /// Returns [`Error::MalformedDictionaryLine`] for a line with a single
    /// field, since it would leave its hash silently unrecoverable.
    pub fn from_dictionary(text: &str) -> Result<Self> {
        let mut table = Self::new();

        for (index, line) in text.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let Some(_token) = fields.next() else {
                continue;
            };
            let name = fields
                .next()
                .ok_or_else(|| Error::malformed_line(index + 1, line))?;
            table.insert(name);
        }

        tracing::debug!("Loaded {} names from dictionary", table.len());
        Ok(table)
    }

    /// Hashes `name` and stores it, returning the hash.
    pub fn insert(&mut self, name: &str) -> u32 {
        let hash = fnv1a_32(name);
        if let Some(previous) = self.names.insert(hash, name.to_string())
            && previous != name
        {
            tracing::debug!("Name {:#010x}: '{}' replaced by '{}'", hash, previous, name);
        }
        hash
    }

    /// Looks up the recovered name for `hash`.
    #[must_use]
    pub fn lookup(&self, hash: u32) -> Option<&str> {
        self.names.get(&hash).map(String::as_str)
    }

    /// Returns true if `hash` has a recovered name.
    #[must_use]
    pub fn contains(&self, hash: u32) -> bool {
        self.names.contains_key(&hash)
    }

    /// Returns the number of recovered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table holds no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(hash, name)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.names.iter().map(|(&hash, name)| (hash, name.as_str()))
    }
}

impl<'a> FromIterator<&'a str> for NameTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for name in iter {
            table.insert(name);
        }
        table
    }
}

/// Synthetic name for a class hash with no recovered name.
#[must_use]
pub fn fallback_class_name(hash: u32) -> String {
    format!("{CLASS_FALLBACK_PREFIX}{hash}")
}

/// Synthetic name for a field hash with no recovered name.
#[must_use]
pub fn fallback_field_name(hash: u32) -> String {
    format!("{FIELD_FALLBACK_PREFIX}{hash}")
}

/// Returns true if `name` has the exact shape of a synthetic field name,
/// `m` followed by one or more decimal digits.
#[must_use]
pub fn is_fallback_field_name(name: &str) -> bool {
    name.strip_prefix(FIELD_FALLBACK_PREFIX)
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
