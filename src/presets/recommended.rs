#![forbid(unsafe_code)]

//! General-purpose preset for TypeScript services and apps

use crate::error::ConfigError;
use crate::presets::{TEST_FILE_GLOB, base};
use crate::profile::{OverrideBlock, Profile};
use crate::rules::{RuleEntry, RuleTable};
use crate::types::{ConfigRef, GlobPattern, PluginId};
use serde_json::json;
use std::collections::BTreeMap;

/// The `recommended` profile: type-aware linting, promise discipline,
/// import hygiene, and a jest override for test files
///
/// # Errors
///
/// Returns `ConfigError` if a rule table entry or override block fails
/// load-time validation.
pub fn recommended() -> Result<Profile, ConfigError> {
    let rules = RuleTable::from_entries([
        // then/catch chains read worse than await and mix poorly with it
        ("promise/prefer-await-to-then", RuleEntry::error()),
        ("unicorn/switch-case-braces", RuleEntry::off()),
        ("unicorn/better-regex", RuleEntry::off()),
        // rtk-query and default component props require explicit undefined
        ("unicorn/no-useless-undefined", RuleEntry::off()),
        ("unicorn/prevent-abbreviations", RuleEntry::off()),
        // null and undefined carry different meanings, and react expects null
        ("unicorn/no-null", RuleEntry::off()),
        ("unicorn/filename-case", RuleEntry::off()),
        ("unicorn/prefer-module", RuleEntry::off()),
        ("unicorn/catch-error-name", RuleEntry::off()),
        ("unicorn/prefer-regexp-test", RuleEntry::off()),
        ("unicorn/prefer-query-selector", RuleEntry::off()),
        ("@typescript-eslint/no-empty-function", RuleEntry::off()),
        ("@typescript-eslint/switch-exhaustiveness-check", RuleEntry::error()),
        // without a compareFunction, number arrays sort as [1, 10, 2, 20]
        ("@typescript-eslint/require-array-sort-compare", RuleEntry::error()),
        ("@typescript-eslint/promise-function-async", RuleEntry::error()),
        (
            "@typescript-eslint/no-floating-promises",
            RuleEntry::error().with_options([json!({ "ignoreVoid": true })]),
        ),
        (
            "@typescript-eslint/consistent-type-definitions",
            RuleEntry::error().with_options([json!("type")]),
        ),
        ("import/no-deprecated", RuleEntry::error()),
        ("import/order", RuleEntry::off()),
        // default exports break intellisense on import under TypeScript
        ("import/prefer-default-export", RuleEntry::off()),
        ("import/no-named-as-default", RuleEntry::off()),
        ("import/default", RuleEntry::off()),
        ("import/no-unresolved", RuleEntry::off()),
        ("array-callback-return", RuleEntry::error()),
        // console output is stripped by the metro bundler
        ("no-console", RuleEntry::off()),
        // for..of stays allowed, it supports break and continue
        (
            "no-restricted-syntax",
            RuleEntry::error().with_options([
                json!({
                    "selector": "ForInStatement",
                    "message": "for..in loops iterate over the entire prototype chain, which is virtually never what you want. Use Object.{keys,values,entries}, and iterate over the resulting array.",
                }),
                json!({
                    "selector": "LabeledStatement",
                    "message": "Labels are a form of GOTO; using them makes code confusing and hard to maintain and understand.",
                }),
                json!({
                    "selector": "WithStatement",
                    "message": "`with` is disallowed in strict mode because it makes code impossible to predict and optimize.",
                }),
            ]),
        ),
        // void statements stay legal so floating promises can be explicitly discarded
        (
            "no-void",
            RuleEntry::error().with_options([json!({ "allowAsStatement": true })]),
        ),
        // the listed parameters are mutated through immer or by the telemetry SDK
        (
            "no-param-reassign",
            RuleEntry::error().with_options([json!({
                "props": true,
                "ignorePropertyModificationsFor": [
                    "state",
                    "stateSlice",
                    "telemetryItem",
                    "cachedDataState",
                ],
            })]),
        ),
        // test ids are kebab-case
        (
            "testing-library/consistent-data-testid",
            RuleEntry::error().with_options([json!({
                "testIdAttribute": ["testID"],
                "testIdPattern": "^[a-z]+(-[a-z]*)*$",
            })]),
        ),
    ])?;

    let mut settings = BTreeMap::new();
    settings.insert(
        "import/parsers".to_string(),
        json!({ "@typescript-eslint/parser": [".ts", ".tsx", ".d.ts"] }),
    );
    settings.insert(
        "import/resolver".to_string(),
        json!({ "typescript": true, "node": true }),
    );

    let mut profile = base();
    profile.apply(Profile {
        plugins: vec![PluginId::TypescriptEslint, PluginId::Unicorn, PluginId::Promise],
        settings,
        extends: vec![
            ConfigRef::eslint("recommended"),
            ConfigRef::plugin(PluginId::TypescriptEslint, "recommended"),
            ConfigRef::plugin(PluginId::TypescriptEslint, "recommended-requiring-type-checking"),
            ConfigRef::plugin(PluginId::TypescriptEslint, "strict"),
            ConfigRef::plugin(PluginId::Promise, "recommended"),
            ConfigRef::plugin(PluginId::Unicorn, "recommended"),
            ConfigRef::plugin(PluginId::Import, "recommended"),
            ConfigRef::shareable("prettier/prettier"),
            // prettier goes last so it can switch off formatting rules
            ConfigRef::shareable("prettier"),
        ],
        rules,
        overrides: vec![test_file_override()?],
        ..Profile::default()
    });
    profile.validate()?;
    Ok(profile)
}

/// Jest and testing-library setup applied to test files only
fn test_file_override() -> Result<OverrideBlock, ConfigError> {
    let rules = RuleTable::from_entries([
        // swapped for jest/unbound-method, which knows what expect() accepts
        ("@typescript-eslint/unbound-method", RuleEntry::off()),
        ("jest/unbound-method", RuleEntry::error()),
        ("jest/prefer-called-with", RuleEntry::error()),
        ("jest/prefer-each", RuleEntry::error()),
        ("jest/prefer-equality-matcher", RuleEntry::error()),
        // every test block must assert something
        (
            "jest/expect-expect",
            RuleEntry::error().with_options([json!({
                "assertFunctionNames": ["expect", "waitForElementToBeRemoved"],
                "additionalTestBlockFunctions": [],
            })]),
        ),
        // no dangling await screen.findBy* queries without an expect around them
        ("testing-library/prefer-explicit-assert", RuleEntry::error()),
    ])?;

    Ok(OverrideBlock {
        files: vec![GlobPattern::new(TEST_FILE_GLOB)],
        plugins: vec![PluginId::Jest, PluginId::TestingLibrary],
        extends: vec![
            ConfigRef::plugin(PluginId::Jest, "recommended"),
            ConfigRef::plugin(PluginId::Jest, "style"),
        ],
        rules,
    })
}
