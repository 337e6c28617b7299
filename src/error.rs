//! Error types for the configuration crate
//!
//! Every failure in this crate happens while presets are constructed,
//! validated, or rendered. Construction fails fast on the first error and
//! never exposes a partially-built profile.

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Rule id outside the `name`, `plugin/name`, `@scope/name` grammar
    #[error("Invalid rule id: {0}")]
    InvalidRuleId(String),

    /// Severity outside off/warn/error
    #[error("Invalid severity '{0}', expected \"off\", \"warn\", or \"error\"")]
    InvalidSeverity(String),

    /// Rule prefix or `plugin:` reference naming an unrecognized plugin
    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String),

    /// Lookup of a profile name the registry does not expose
    #[error("Unknown profile '{0}', expected one of: recommended, react, react-native")]
    UnknownProfile(String),

    /// Malformed `extends` reference
    #[error("Invalid config reference: {0}")]
    InvalidConfigRef(String),

    /// Structurally invalid override block
    #[error("Invalid override block: {0}")]
    InvalidOverride(String),

    /// Profile failed to render as JSON
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
