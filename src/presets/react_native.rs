#![forbid(unsafe_code)]

//! Preset for React Native mobile projects

use crate::error::ConfigError;
use crate::presets::{TEST_FILE_GLOB, base};
use crate::profile::{OverrideBlock, Profile};
use crate::rules::{RuleEntry, RuleTable};
use crate::types::{ConfigRef, GlobPattern, PluginId};
use serde_json::json;
use std::collections::BTreeMap;

/// The `react-native` profile: component rules plus mobile accessibility
/// checks and a testing-library override for test files
///
/// # Errors
///
/// Returns `ConfigError` if a rule table entry or override block fails
/// load-time validation.
pub fn react_native() -> Result<Profile, ConfigError> {
    let rules = RuleTable::from_entries([
        ("react-native/no-inline-styles", RuleEntry::off()),
        // && chains can leak 0 or NaN into the rendered output
        ("react/jsx-no-leaked-render", RuleEntry::error()),
        // StatusBar takes a string style prop
        (
            "react/style-prop-object",
            RuleEntry::error().with_options([json!({ "allow": ["StatusBar"] })]),
        ),
        // useContext(Ctx) without destructuring keeps the source obvious
        ("react/destructuring-assignment", RuleEntry::off()),
        // default arguments instead of PropTypes defaults
        (
            "react/require-default-props",
            RuleEntry::error().with_options([json!({ "functions": "defaultArguments" })]),
        ),
        ("react/jsx-props-no-spreading", RuleEntry::off()),
    ])?;

    let override_rules = RuleTable::from_entries([
        // swapped for jest/unbound-method, which knows what expect() accepts
        ("@typescript-eslint/unbound-method", RuleEntry::off()),
        ("jest/unbound-method", RuleEntry::error()),
    ])?;

    let mut settings = BTreeMap::new();
    settings.insert("react".to_string(), json!({ "version": "detect" }));

    let mut profile = base();
    profile.apply(Profile {
        settings,
        extends: vec![
            ConfigRef::plugin(PluginId::React, "recommended"),
            ConfigRef::shareable("@react-native-community"),
            ConfigRef::plugin(PluginId::ReactNativeA11y, "all"),
        ],
        rules,
        overrides: vec![OverrideBlock {
            files: vec![GlobPattern::new(TEST_FILE_GLOB)],
            plugins: vec![PluginId::Jest, PluginId::TestingLibrary],
            extends: vec![
                ConfigRef::plugin(PluginId::Jest, "recommended"),
                ConfigRef::plugin(PluginId::TestingLibrary, "react"),
            ],
            rules: override_rules,
        }],
        ..Profile::default()
    });
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn test_react_native_loads_and_validates() {
        let profile = react_native().unwrap();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.rules.len(), 6);
    }

    #[test]
    fn test_react_native_allows_inline_styles() {
        let profile = react_native().unwrap();
        assert_eq!(
            profile
                .rules
                .get("react-native/no-inline-styles")
                .unwrap()
                .severity(),
            Severity::Off
        );
    }

    #[test]
    fn test_react_native_style_prop_allows_status_bar() {
        let profile = react_native().unwrap();
        let entry = profile.rules.get("react/style-prop-object").unwrap();
        assert_eq!(entry.severity(), Severity::Error);
        assert_eq!(entry.options(), &[json!({ "allow": ["StatusBar"] })]);
    }

    #[test]
    fn test_react_native_extends_accessibility_configs() {
        let profile = react_native().unwrap();
        let extends: Vec<String> = profile.extends.iter().map(ToString::to_string).collect();
        assert_eq!(
            extends,
            [
                "plugin:react/recommended",
                "@react-native-community",
                "plugin:react-native-a11y/all",
            ]
        );
    }

    #[test]
    fn test_react_native_test_override_pairs_unbound_method() {
        let profile = react_native().unwrap();
        assert_eq!(profile.overrides.len(), 1);

        let block = &profile.overrides[0];
        assert_eq!(block.files[0].as_str(), TEST_FILE_GLOB);
        assert_eq!(block.plugins, vec![PluginId::Jest, PluginId::TestingLibrary]);
        assert_eq!(
            block
                .rules
                .get("@typescript-eslint/unbound-method")
                .unwrap()
                .severity(),
            Severity::Off
        );
        assert_eq!(
            block.rules.get("jest/unbound-method").unwrap().severity(),
            Severity::Error
        );
    }
}
