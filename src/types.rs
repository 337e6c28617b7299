#![forbid(unsafe_code)]

//! Core domain types for the configuration model
//!
//! This module defines the identifiers and severity levels used throughout
//! the preset definitions.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Rule severity levels understood by the downstream linter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    /// Returns the severity as the string the linter accepts
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Severity::Off),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(ConfigError::InvalidSeverity(s.to_string())),
        }
    }
}

/// A validated rule identifier
///
/// Rule IDs name either a core rule (`no-void`), a plugin rule
/// (`promise/prefer-await-to-then`), or a scoped plugin rule
/// (`@typescript-eslint/no-floating-promises`). Segments contain only
/// alphanumeric characters, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new RuleId, validating the input
    ///
    /// Returns None if the input is empty or does not follow the rule id
    /// grammar.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if Self::is_valid(&id) { Some(RuleId(id)) } else { None }
    }

    fn is_valid(id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        let segments: Vec<&str> = id.split('/').collect();
        let scoped = id.starts_with('@');
        let (min, max) = if scoped { (2, 3) } else { (1, 2) };
        if segments.len() < min || segments.len() > max {
            return false;
        }
        segments.iter().enumerate().all(|(i, &segment)| {
            let body = if i == 0 && scoped {
                &segment[1..]
            } else {
                segment
            };
            !body.is_empty()
                && body
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        })
    }

    /// Returns the rule ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the plugin prefix, if the id names a plugin rule
    ///
    /// Core rule ids like `no-console` have no prefix.
    pub fn plugin_prefix(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(prefix, _)| prefix)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for RuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RuleId {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if RuleId::is_valid(&value) {
            Ok(RuleId(value))
        } else {
            Err(ConfigError::InvalidRuleId(value))
        }
    }
}

impl From<RuleId> for String {
    fn from(rule_id: RuleId) -> Self {
        rule_id.0
    }
}

/// A file glob pattern selecting files an override block applies to
///
/// Patterns are forwarded verbatim to the downstream linter, which matches
/// them in its own glob dialect. They are never compiled or matched here,
/// so the exact bytes are part of the published contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Creates a new GlobPattern
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    /// Returns the pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the pattern is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GlobPattern {
    fn from(pattern: String) -> Self {
        GlobPattern(pattern)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}

/// Plugin identifiers recognized by the presets
///
/// Plugins are referenced by name only; installing and executing them is
/// the downstream linter's job. Rule prefixes and `plugin:` config
/// references must resolve to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PluginId {
    TypescriptEslint,
    Unicorn,
    Promise,
    Import,
    React,
    ReactNative,
    ReactNativeA11y,
    Jest,
    TestingLibrary,
}

impl PluginId {
    /// Every recognized plugin, in declaration order
    pub const ALL: [PluginId; 9] = [
        PluginId::TypescriptEslint,
        PluginId::Unicorn,
        PluginId::Promise,
        PluginId::Import,
        PluginId::React,
        PluginId::ReactNative,
        PluginId::ReactNativeA11y,
        PluginId::Jest,
        PluginId::TestingLibrary,
    ];

    /// Returns the plugin name as it appears in configuration output
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginId::TypescriptEslint => "@typescript-eslint",
            PluginId::Unicorn => "unicorn",
            PluginId::Promise => "promise",
            PluginId::Import => "import",
            PluginId::React => "react",
            PluginId::ReactNative => "react-native",
            PluginId::ReactNativeA11y => "react-native-a11y",
            PluginId::Jest => "jest",
            PluginId::TestingLibrary => "testing-library",
        }
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluginId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluginId::ALL
            .into_iter()
            .find(|plugin| plugin.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownPlugin(s.to_string()))
    }
}

impl TryFrom<String> for PluginId {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PluginId> for String {
    fn from(plugin: PluginId) -> Self {
        plugin.as_str().to_string()
    }
}

/// An entry of an `extends` list
///
/// References come in three forms: configs bundled with the linter
/// (`eslint:recommended`), configs exported by a recognized plugin
/// (`plugin:jest/style`), and shareable config packages kept verbatim
/// (`prettier`, `@react-native-community`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ConfigRef {
    /// A config bundled with the linter itself
    Eslint(String),
    /// A config exported by a recognized plugin
    Plugin { plugin: PluginId, config: String },
    /// A shareable config package reference, kept verbatim
    Shareable(String),
}

impl ConfigRef {
    /// Reference to a config bundled with the linter
    pub fn eslint(name: impl Into<String>) -> Self {
        ConfigRef::Eslint(name.into())
    }

    /// Reference to a config exported by a plugin
    pub fn plugin(plugin: PluginId, config: impl Into<String>) -> Self {
        ConfigRef::Plugin {
            plugin,
            config: config.into(),
        }
    }

    /// Reference to a shareable config package
    pub fn shareable(name: impl Into<String>) -> Self {
        ConfigRef::Shareable(name.into())
    }
}

impl fmt::Display for ConfigRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigRef::Eslint(name) => write!(f, "eslint:{name}"),
            ConfigRef::Plugin { plugin, config } => write!(f, "plugin:{plugin}/{config}"),
            ConfigRef::Shareable(name) => f.write_str(name),
        }
    }
}

impl FromStr for ConfigRef {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ConfigError::InvalidConfigRef(s.to_string()));
        }
        if let Some(name) = s.strip_prefix("eslint:") {
            if name.is_empty() {
                return Err(ConfigError::InvalidConfigRef(s.to_string()));
            }
            return Ok(ConfigRef::Eslint(name.to_string()));
        }
        if let Some(rest) = s.strip_prefix("plugin:") {
            for plugin in PluginId::ALL {
                let config = rest
                    .strip_prefix(plugin.as_str())
                    .and_then(|tail| tail.strip_prefix('/'));
                if let Some(config) = config {
                    if config.is_empty() {
                        return Err(ConfigError::InvalidConfigRef(s.to_string()));
                    }
                    return Ok(ConfigRef::Plugin {
                        plugin,
                        config: config.to_string(),
                    });
                }
            }
            let plugin = rest.split('/').next().unwrap_or(rest);
            return Err(ConfigError::UnknownPlugin(plugin.to_string()));
        }
        Ok(ConfigRef::Shareable(s.to_string()))
    }
}

impl TryFrom<String> for ConfigRef {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ConfigRef> for String {
    fn from(config_ref: ConfigRef) -> Self {
        config_ref.to_string()
    }
}

/// Names of the profiles the crate exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProfileName {
    Recommended,
    React,
    ReactNative,
}

impl ProfileName {
    /// Every exposed profile, in declaration order
    pub const ALL: [ProfileName; 3] = [
        ProfileName::Recommended,
        ProfileName::React,
        ProfileName::ReactNative,
    ];

    /// Returns the profile name as consumers spell it
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileName::Recommended => "recommended",
            ProfileName::React => "react",
            ProfileName::ReactNative => "react-native",
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownProfile(s.to_string()))
    }
}

impl TryFrom<String> for ProfileName {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProfileName> for String {
    fn from(name: ProfileName) -> Self {
        name.as_str().to_string()
    }
}
