#![forbid(unsafe_code)]

//! Shareable lint configuration presets for Tevent projects
//!
//! The crate builds three fully-resolved ESLint profiles (`recommended`,
//! `react`, and `react-native`) as immutable data and renders them in the
//! shape the linter consumes. There is no engine here: a profile is a
//! layered rule table plus parser, plugin, and override settings,
//! constructed and validated once at load time.

pub mod error;
pub mod presets;
pub mod profile;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::ConfigError;

// Re-export core domain types for convenient access
pub use types::{ConfigRef, GlobPattern, PluginId, ProfileName, RuleId, Severity};

// Re-export the profile model and presets for convenient access
pub use presets::{PresetRegistry, TEST_FILE_GLOB, base, react, react_native, recommended};
pub use profile::{Env, OverrideBlock, Parser, ParserOptions, Profile, SourceType};
pub use rules::{RuleEntry, RuleTable};
