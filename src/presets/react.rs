#![forbid(unsafe_code)]

//! Preset for React web projects

use crate::error::ConfigError;
use crate::presets::{TEST_FILE_GLOB, base};
use crate::profile::{OverrideBlock, Profile};
use crate::rules::{RuleEntry, RuleTable};
use crate::types::{ConfigRef, GlobPattern, PluginId};
use serde_json::json;
use std::collections::BTreeMap;

/// The `react` profile: component and JSX rules on top of the base layer
///
/// # Errors
///
/// Returns `ConfigError` if a rule table entry or override block fails
/// load-time validation.
pub fn react() -> Result<Profile, ConfigError> {
    let rules = RuleTable::from_entries([
        // && chains can leak 0 or NaN into the rendered output
        ("react/jsx-no-leaked-render", RuleEntry::error()),
        ("react/style-prop-object", RuleEntry::error()),
        // useContext(Ctx) without destructuring keeps the source obvious
        ("react/destructuring-assignment", RuleEntry::off()),
        // default arguments instead of PropTypes defaults
        (
            "react/require-default-props",
            RuleEntry::error().with_options([json!({ "functions": "defaultArguments" })]),
        ),
        ("react/jsx-props-no-spreading", RuleEntry::off()),
    ])?;

    let mut settings = BTreeMap::new();
    settings.insert("react".to_string(), json!({ "version": "detect" }));

    let mut profile = base();
    profile.apply(Profile {
        settings,
        extends: vec![ConfigRef::plugin(PluginId::React, "recommended")],
        rules,
        overrides: vec![OverrideBlock {
            files: vec![GlobPattern::new(TEST_FILE_GLOB)],
            plugins: vec![PluginId::TestingLibrary],
            extends: vec![ConfigRef::plugin(PluginId::TestingLibrary, "react")],
            rules: RuleTable::new(),
        }],
        ..Profile::default()
    });
    profile.validate()?;
    Ok(profile)
}
