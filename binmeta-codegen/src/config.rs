//! Generator configuration.
//!
//! Two generator revisions existed historically. The current one flattens
//! interface properties into concrete classes, wraps link and optional types,
//! and annotates every property with the name or hash it serializes under.
//! The legacy one did none of that. Both are exposed as profiles of one
//! generator, and each switch can also be set on its own.

use std::fmt;
use std::str::FromStr;

/// Named generator profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// Interface flattening, wrapper types and annotations.
    #[default]
    Current,
    /// Bare types, no annotations, no interface flattening.
    Legacy,
}

impl Profile {
    /// Returns the profile name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "current" => Ok(Self::Current),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown profile '{other}'")),
        }
    }
}

/// Options controlling the shape of generated classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    merge_interfaces: bool,
    wrap_links: bool,
    wrap_optionals: bool,
    emit_annotations: bool,
}

impl GeneratorConfig {
    /// Creates the configuration of the current generator revision.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            merge_interfaces: true,
            wrap_links: true,
            wrap_optionals: true,
            emit_annotations: true,
        }
    }

    /// Creates the configuration of the legacy generator revision.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            merge_interfaces: false,
            wrap_links: false,
            wrap_optionals: false,
            emit_annotations: false,
        }
    }

    /// Creates the configuration of a named profile.
    #[must_use]
    pub const fn from_profile(profile: Profile) -> Self {
        match profile {
            Profile::Current => Self::current(),
            Profile::Legacy => Self::legacy(),
        }
    }

    /// Sets whether concrete classes re-declare the properties of every
    /// interface in their lineage.
    #[must_use]
    pub const fn merge_interfaces(mut self, enabled: bool) -> Self {
        self.merge_interfaces = enabled;
        self
    }

    /// Sets whether link properties are emitted as `Link<T>` instead of `T`.
    #[must_use]
    pub const fn wrap_links(mut self, enabled: bool) -> Self {
        self.wrap_links = enabled;
        self
    }

    /// Sets whether optional properties are emitted as `Optional<T>` instead
    /// of `T`.
    #[must_use]
    pub const fn wrap_optionals(mut self, enabled: bool) -> Self {
        self.wrap_optionals = enabled;
        self
    }

    /// Sets whether each property is prefixed with its `[BINValue]`
    /// annotation.
    #[must_use]
    pub const fn emit_annotations(mut self, enabled: bool) -> Self {
        self.emit_annotations = enabled;
        self
    }

    /// Returns true if interface properties are merged into classes.
    #[must_use]
    pub const fn merges_interfaces(&self) -> bool {
        self.merge_interfaces
    }

    /// Returns true if link types are wrapped.
    #[must_use]
    pub const fn wraps_links(&self) -> bool {
        self.wrap_links
    }

    /// Returns true if optional types are wrapped.
    #[must_use]
    pub const fn wraps_optionals(&self) -> bool {
        self.wrap_optionals
    }

    /// Returns true if annotations are emitted.
    #[must_use]
    pub const fn emits_annotations(&self) -> bool {
        self.emit_annotations
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::current()
    }
}

impl From<Profile> for GeneratorConfig {
    fn from(profile: Profile) -> Self {
        Self::from_profile(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_current() {
        let config = GeneratorConfig::default();
        assert_eq!(config, GeneratorConfig::current());
        assert!(config.merges_interfaces());
        assert!(config.wraps_links());
        assert!(config.wraps_optionals());
        assert!(config.emits_annotations());
    }

    #[test]
    fn test_legacy_profile() {
        let config = GeneratorConfig::from(Profile::Legacy);
        assert!(!config.merges_interfaces());
        assert!(!config.wraps_links());
        assert!(!config.wraps_optionals());
        assert!(!config.emits_annotations());
    }

    #[test]
    fn test_individual_overrides() {
        let config = GeneratorConfig::current()
            .wrap_links(false)
            .emit_annotations(false);
        assert!(config.merges_interfaces());
        assert!(!config.wraps_links());
        assert!(config.wraps_optionals());
        assert!(!config.emits_annotations());
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("legacy".parse::<Profile>(), Ok(Profile::Legacy));
        assert_eq!("Current".parse::<Profile>(), Ok(Profile::Current));
        assert!("modern".parse::<Profile>().is_err());
        assert_eq!(Profile::Legacy.to_string(), "legacy");
    }
}
