//! Core data model definitions shared across Lexicon crates.
#![allow(missing_docs)]

pub mod entry;
pub mod error;
pub mod filter_types;
pub mod identity;
pub mod ids;
pub mod preferences;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use entry::VocabularyEntry;
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{FilterQuery, FilterScope, Letter};
pub use identity::Identity;
pub use ids::{EntryId, UserId};
pub use preferences::{
    DEFAULT_PAGE_SIZE, DisplayToggle, PAGE_SIZE_OPTIONS, PreferenceKey,
    PreferenceSet, validate_page_size,
};
