//! Built-in configuration presets
//!
//! Every preset starts from the shared [`base`] layer and applies its own
//! overlay on top, mirroring how the published configs spread a common
//! settings object into each profile.

pub mod base;
pub mod react;
pub mod react_native;
pub mod recommended;
pub mod registry;

pub use base::base;
pub use react::react;
pub use react_native::react_native;
pub use recommended::recommended;
pub use registry::PresetRegistry;

/// Glob selecting test files, forwarded verbatim to the downstream linter
///
/// The exact bytes are part of the published contract; consumers pin their
/// test-file conventions to this pattern.
pub const TEST_FILE_GLOB: &str = "**/?(*.)+(test).[jt]s?(x)";
