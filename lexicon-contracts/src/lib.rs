//! Trait surfaces for the collaborators the Lexicon engine talks to.
//!
//! The engine never reaches a network, a browser or a display directly; it
//! consumes these capabilities so it can be driven headless in tests.

pub mod catalog_source;
pub mod favorite_store;
pub mod identity;
pub mod layout;
pub mod storage;

pub use catalog_source::{CatalogError, CatalogSource};
pub use favorite_store::{FavoriteStore, StoreError};
pub use identity::{IdentityError, IdentityProvider};
pub use layout::{ScrollBehavior, ScrollSurface};
pub use storage::{KeyValueStorage, StorageError};

/// Frequently used trait imports for engine and front-end crates.
pub mod prelude {
    pub use super::catalog_source::CatalogSource;
    pub use super::favorite_store::FavoriteStore;
    pub use super::identity::IdentityProvider;
    pub use super::layout::{ScrollBehavior, ScrollSurface};
    pub use super::storage::KeyValueStorage;
}
