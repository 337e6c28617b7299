#![forbid(unsafe_code)]

//! Shared settings layer every preset starts from

use crate::profile::{Env, Parser, ParserOptions, Profile, SourceType};
use crate::types::PluginId;
use serde_json::json;
use std::collections::BTreeMap;

/// The common base layer: TypeScript-aware parsing and import resolution
///
/// Declares the runtime environments, selects the TypeScript parser with
/// type-aware linting enabled, and teaches import resolution about the
/// extensions the projects use. Carries no rule table of its own;
/// construction never fails.
pub fn base() -> Profile {
    let mut env = BTreeMap::new();
    env.insert(Env::Es2021, true);
    env.insert(Env::Node, true);

    let mut settings = BTreeMap::new();
    settings.insert(
        "import/parsers".to_string(),
        json!({ "@typescript-eslint/parser": [".ts", ".tsx", ".d.ts"] }),
    );
    settings.insert(
        "import/resolver".to_string(),
        json!({ "typescript": true, "node": true }),
    );
    settings.insert(
        "import/extensions".to_string(),
        json!([".js", ".mjs", ".jsx", ".ts", ".tsx", ".d.ts"]),
    );
    settings.insert(
        "import/external-module-folders".to_string(),
        json!(["node_modules", "node_modules/@types"]),
    );

    Profile {
        env,
        parser: Some(Parser::TypescriptEslint),
        parser_options: Some(ParserOptions {
            source_type: Some(SourceType::Module),
            project: Some("./tsconfig.json".to_string()),
        }),
        plugins: vec![PluginId::TypescriptEslint],
        settings,
        ..Profile::default()
    }
}
