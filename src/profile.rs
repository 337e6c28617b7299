//! Profile model: a rule table plus the ancillary linter settings
//!
//! A profile is the unit consumers select. It carries the parser contract,
//! plugin list, shared settings, the `extends` chain, the rule table, and
//! per-glob override blocks. Profiles compose by layering: ancillary fields
//! replace wholesale, rule tables merge by override union.

use crate::error::ConfigError;
use crate::rules::RuleTable;
use crate::types::{ConfigRef, GlobPattern, PluginId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Environment flags a profile declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    Es2021,
    Node,
}

/// Parser identifiers a profile can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parser {
    /// The TypeScript-aware parser
    #[serde(rename = "@typescript-eslint/parser")]
    TypescriptEslint,
}

impl Parser {
    /// Returns the parser name as it appears in configuration output
    pub fn as_str(&self) -> &'static str {
        match self {
            Parser::TypescriptEslint => "@typescript-eslint/parser",
        }
    }
}

/// Module system assumed when parsing source files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Script,
    Module,
}

/// Options forwarded to the parser
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,

    /// Path to the TypeScript project config enabling type-aware rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

/// A rule-table variant applied to files matching any of `files`
///
/// The glob patterns are matched by the downstream linter, not here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverrideBlock {
    /// Glob patterns selecting the files this block applies to
    pub files: Vec<GlobPattern>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginId>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<ConfigRef>,

    #[serde(default, skip_serializing_if = "RuleTable::is_empty")]
    pub rules: RuleTable,
}

/// A named, fully-resolved lint configuration
///
/// Serializes to the flat object shape the downstream linter consumes.
/// Empty collections are omitted from the output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<Env, bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<Parser>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<ParserOptions>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginId>,

    /// Free-form settings blocks forwarded to plugins, keyed by name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub settings: BTreeMap<String, Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<ConfigRef>,

    #[serde(default, skip_serializing_if = "RuleTable::is_empty")]
    pub rules: RuleTable,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideBlock>,
}

impl Profile {
    /// Creates an empty profile
    pub fn new() -> Self {
        Profile::default()
    }

    /// Layers an overlay onto this profile
    ///
    /// Ancillary fields the overlay sets replace this profile's values:
    /// `parser` and `parserOptions` when present, the collections when
    /// non-empty. Fields the overlay leaves unset keep the base values.
    /// Rule tables compose by override union instead of replacement.
    pub fn apply(&mut self, overlay: Profile) {
        if !overlay.env.is_empty() {
            self.env = overlay.env;
        }
        if overlay.parser.is_some() {
            self.parser = overlay.parser;
        }
        if overlay.parser_options.is_some() {
            self.parser_options = overlay.parser_options;
        }
        if !overlay.plugins.is_empty() {
            self.plugins = overlay.plugins;
        }
        if !overlay.settings.is_empty() {
            self.settings = overlay.settings;
        }
        if !overlay.extends.is_empty() {
            self.extends = overlay.extends;
        }
        self.rules.apply(&overlay.rules);
        if !overlay.overrides.is_empty() {
            self.overrides = overlay.overrides;
        }
    }

    /// Validates the fully-composed profile
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownPlugin` if a rule id carries a prefix
    /// outside the recognized plugin set, and `ConfigError::InvalidOverride`
    /// if an override block has no file patterns or an empty pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_rules(&self.rules)?;
        for block in &self.overrides {
            if block.files.is_empty() {
                return Err(ConfigError::InvalidOverride(
                    "override block has no file patterns".to_string(),
                ));
            }
            for pattern in &block.files {
                if pattern.is_empty() {
                    return Err(ConfigError::InvalidOverride(
                        "override block has an empty file pattern".to_string(),
                    ));
                }
            }
            validate_rules(&block.rules)?;
        }
        Ok(())
    }

    /// Renders the profile as compact JSON
    ///
    /// Output is deterministic: maps serialize in key order, so equal
    /// profiles render byte-identically.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders the profile as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Checks that every rule id names a core rule or a recognized plugin
fn validate_rules(rules: &RuleTable) -> Result<(), ConfigError> {
    for (id, _) in rules.iter() {
        if let Some(prefix) = id.plugin_prefix() {
            prefix.parse::<PluginId>()?;
        }
    }
    Ok(())
}
