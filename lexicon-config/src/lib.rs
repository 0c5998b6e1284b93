//! Configuration for Lexicon front ends.
//!
//! Resolves where the catalog and the local stores live and which engine
//! tunables apply, from an explicit file, environment variables, default
//! file locations, or built-in defaults, in that order.

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigSource, EnvConfig,
    error::ConfigLoadError,
};
pub use models::{CatalogConfig, LexiconConfig, StorageConfig};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
