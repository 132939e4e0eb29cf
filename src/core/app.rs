//! Application identity from Cargo.toml.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Application version (from Cargo.toml `package.version`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate manifest directory, baked in at compile time.
pub const MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");
