//! Provided implementations of the collaborator traits.
//!
//! `memory` keeps everything in process and backs the tests; `json_file`
//! persists to local JSON documents for the command-line front end.

pub mod identity;
pub mod json_file;
pub mod memory;

pub use identity::LocalIdentityProvider;
pub use json_file::{JsonFileFavoriteStore, JsonFileStorage};
pub use memory::{InMemoryFavoriteStore, InMemoryStorage};
