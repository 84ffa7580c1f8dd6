//! Data-driven support power content.
//!
//! This crate houses the bundled power definitions and provides loaders for
//! RON/TOML data files:
//! - Support power catalogs (data-driven via RON)
//! - Simulation configuration (data-driven via TOML)
//!
//! Content is consumed by hosts when they attach powers to entities and never
//! appears in manager state.
//!
//! All loaders use powers-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, PowerCatalog, PowerLoader};

/// Directory holding the bundled `powers.ron` and `config.toml`.
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
