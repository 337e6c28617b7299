#![forbid(unsafe_code)]

//! Aggregator exposing the named presets

use crate::error::ConfigError;
use crate::presets::{react, react_native, recommended};
use crate::profile::Profile;
use crate::types::ProfileName;

/// Name-to-profile lookup over every exposed preset
///
/// Profiles are constructed and validated once at load time and never
/// mutated afterwards. Lookup by [`ProfileName`] is total; lookup by
/// string goes through [`PresetRegistry::resolve`] and can fail.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetRegistry {
    recommended: Profile,
    react: Profile,
    react_native: Profile,
}

impl PresetRegistry {
    /// Builds and validates every preset, failing fast on the first error
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` raised while constructing a preset.
    /// On error no registry is produced; a partially-loaded registry never
    /// exists.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(PresetRegistry {
            recommended: recommended()?,
            react: react()?,
            react_native: react_native()?,
        })
    }

    /// Returns the profile registered under `name`
    pub fn get(&self, name: ProfileName) -> &Profile {
        match name {
            ProfileName::Recommended => &self.recommended,
            ProfileName::React => &self.react,
            ProfileName::ReactNative => &self.react_native,
        }
    }

    /// Looks up a profile by its consumer-facing name
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownProfile` for names the registry does
    /// not expose.
    pub fn resolve(&self, name: &str) -> Result<&Profile, ConfigError> {
        Ok(self.get(name.parse()?))
    }

    /// Iterates the profiles in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ProfileName, &Profile)> {
        ProfileName::ALL.into_iter().map(|name| (name, self.get(name)))
    }

    /// Returns the number of exposed profiles
    pub fn len(&self) -> usize {
        ProfileName::ALL.len()
    }

    /// A registry is never empty
    pub fn is_empty(&self) -> bool {
        false
    }
}
