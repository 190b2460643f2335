//! parseconf version information.
//!
//! All values come from Cargo metadata at compile time, so the library, the CLI and any embedder
//! agree on one version.

/// The version string (for example, `1.0.0`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");
const MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");
const PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");

pub fn version_major() -> u32 {
    MAJOR.parse().unwrap_or(0)
}

pub fn version_minor() -> u32 {
    MINOR.parse().unwrap_or(0)
}

pub fn version_patch() -> u32 {
    PATCH.parse().unwrap_or(0)
}
