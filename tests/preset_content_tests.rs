//! Integration tests for the built-in presets
//!
//! This module verifies the published contract of each profile: the shared
//! parsing setup, the pinned rule entries, the test-file override blocks,
//! and the distinctness of the exposed profiles.

mod common;

use common::TestResult;
use serde_json::{Value, json};
use tevent_eslint_config::{
    PresetRegistry, Profile, ProfileName, Severity, TEST_FILE_GLOB, base, react, react_native,
    recommended,
};

/// Collects the rules objects of a serialized profile: the top-level table
/// plus one per override block
fn serialized_rule_tables(profile: &Profile) -> Vec<Value> {
    let value = serde_json::to_value(profile).unwrap();
    let mut tables = Vec::new();
    if let Some(rules) = value.get("rules") {
        tables.push(rules.clone());
    }
    if let Some(overrides) = value.get("overrides").and_then(Value::as_array) {
        for block in overrides {
            if let Some(rules) = block.get("rules") {
                tables.push(rules.clone());
            }
        }
    }
    tables
}

// ============================================================================
// Shared base contract
// ============================================================================

#[test]
fn test_every_profile_keeps_the_base_parsing_contract() -> TestResult {
    for profile in [recommended()?, react()?, react_native()?] {
        let value = serde_json::to_value(&profile)?;
        assert_eq!(value["parser"], json!("@typescript-eslint/parser"));
        assert_eq!(value["env"], json!({ "es2021": true, "node": true }));
        assert_eq!(
            value["parserOptions"],
            json!({ "sourceType": "module", "project": "./tsconfig.json" })
        );
    }
    Ok(())
}

#[test]
fn test_profiles_replace_base_settings_wholesale() -> TestResult {
    // the base layer carries four import/* settings blocks; each profile
    // swaps in its own settings map rather than merging key by key
    assert_eq!(base().settings.len(), 4);

    let recommended = recommended()?;
    assert_eq!(recommended.settings.len(), 2);
    assert!(!recommended.settings.contains_key("import/extensions"));
    assert!(!recommended.settings.contains_key("import/external-module-folders"));

    let react_native = react_native()?;
    assert_eq!(react_native.settings.len(), 1);
    assert!(react_native.settings.contains_key("react"));
    assert!(!react_native.settings.contains_key("import/parsers"));
    Ok(())
}

// ============================================================================
// Pinned rule entries
// ============================================================================

#[test]
fn test_recommended_pins_no_floating_promises() -> TestResult {
    let profile = recommended()?;
    let entry = profile
        .rules
        .get("@typescript-eslint/no-floating-promises")
        .expect("rule is configured");
    assert_eq!(entry.severity(), Severity::Error);
    assert_eq!(entry.options(), &[json!({ "ignoreVoid": true })]);

    // and the serialized shape is the [severity, options] array form
    let value = serde_json::to_value(&profile)?;
    assert_eq!(
        value["rules"]["@typescript-eslint/no-floating-promises"],
        json!(["error", { "ignoreVoid": true }])
    );
    Ok(())
}

#[test]
fn test_recommended_pairs_no_void_with_ignore_void() -> TestResult {
    // void-as-statement is the designated escape hatch for the
    // floating-promises check, the two entries travel together
    let profile = recommended()?;
    let no_void = profile.rules.get("no-void").expect("rule is configured");
    assert_eq!(no_void.options(), &[json!({ "allowAsStatement": true })]);
    Ok(())
}

// ============================================================================
// Test-file override blocks
// ============================================================================

#[test]
fn test_react_native_test_override_targets_test_files() -> TestResult {
    let profile = react_native()?;
    assert_eq!(profile.overrides.len(), 1);

    let block = &profile.overrides[0];
    // exact bytes of the published glob, the downstream linter matches it
    // against names like Component.test.tsx
    assert_eq!(block.files[0].as_str(), "**/?(*.)+(test).[jt]s?(x)");
    assert_eq!(block.files[0].as_str(), TEST_FILE_GLOB);

    // the block carries at least one jest rule
    let has_jest_rule = block
        .rules
        .iter()
        .any(|(id, _)| id.plugin_prefix() == Some("jest"));
    assert!(has_jest_rule);
    Ok(())
}

#[test]
fn test_all_test_overrides_share_the_same_glob() -> TestResult {
    for profile in [recommended()?, react()?, react_native()?] {
        assert_eq!(profile.overrides.len(), 1);
        let files: Vec<&str> = profile.overrides[0]
            .files
            .iter()
            .map(|pattern| pattern.as_str())
            .collect();
        assert_eq!(files, [TEST_FILE_GLOB]);
    }
    Ok(())
}

#[test]
fn test_unbound_method_swap_is_consistent() -> TestResult {
    // wherever the jest replacement is enabled, the type-checked original
    // is switched off in the same block
    for profile in [recommended()?, react_native()?] {
        let block = &profile.overrides[0];
        assert_eq!(
            block.rules.get("jest/unbound-method").unwrap().severity(),
            Severity::Error
        );
        assert_eq!(
            block
                .rules
                .get("@typescript-eslint/unbound-method")
                .unwrap()
                .severity(),
            Severity::Off
        );
    }
    Ok(())
}

// ============================================================================
// Profile distinctness
// ============================================================================

#[test]
fn test_react_and_react_native_are_distinct() -> TestResult {
    let registry = PresetRegistry::load()?;
    let react = registry.get(ProfileName::React);
    let react_native = registry.get(ProfileName::ReactNative);

    assert_ne!(react, react_native);

    // both inherit the base parsing contract
    assert_eq!(react.parser, react_native.parser);
    assert_eq!(react.env, react_native.env);

    // but the rule tables diverge beyond it
    assert!(react_native.rules.contains("react-native/no-inline-styles"));
    assert!(!react.rules.contains("react-native/no-inline-styles"));
    assert_ne!(
        react.rules.get("react/style-prop-object"),
        react_native.rules.get("react/style-prop-object")
    );
    Ok(())
}

// ============================================================================
// Output well-formedness
// ============================================================================

#[test]
fn test_every_serialized_rule_value_is_well_formed() -> TestResult {
    for profile in [recommended()?, react()?, react_native()?] {
        for table in serialized_rule_tables(&profile) {
            let entries = table.as_object().expect("rules serialize as an object");
            for (id, value) in entries {
                match value {
                    Value::String(severity) => {
                        assert!(
                            matches!(severity.as_str(), "off" | "warn" | "error"),
                            "rule '{}' has severity '{}'",
                            id,
                            severity
                        );
                    }
                    Value::Array(items) => {
                        assert!(
                            items.len() >= 2,
                            "rule '{}' has an array value without options",
                            id
                        );
                        let severity = items[0].as_str().unwrap_or_default();
                        assert!(
                            matches!(severity, "off" | "warn" | "error"),
                            "rule '{}' has severity {:?}",
                            id,
                            items[0]
                        );
                    }
                    other => panic!("rule '{}' has unexpected value {:?}", id, other),
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_loading_is_deterministic() -> TestResult {
    // two independent loads agree structurally and byte for byte
    let first = PresetRegistry::load()?;
    let second = PresetRegistry::load()?;
    assert_eq!(first, second);

    for name in ProfileName::ALL {
        assert_eq!(first.get(name).to_json()?, second.get(name).to_json()?);
    }
    Ok(())
}
