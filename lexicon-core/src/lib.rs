//! # Lexicon Core
//!
//! Engine behind a vocabulary catalog screen: filtering, client-side
//! pagination with scroll preservation, persisted display preferences, and
//! optimistic per-user favorites kept in sync with a remote store.
//!
//! ## Overview
//!
//! - **Catalog**: immutable entry list loaded from JSON or TSV sources
//! - **Filtering**: search text, alphabet letter and favorites-only scope
//! - **Pagination**: page slicing plus the scroll protocol around a page change
//! - **Preferences**: display toggles and page size in key/value storage
//! - **Favorites**: local-first toggles reconciled against a [`FavoriteStore`]
//! - **Gestures**: press-and-hold and double activation turned into intents
//!
//! [`view::CatalogView`] ties these together for a front end.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use lexicon_core::{
//!     Catalog, CatalogView, EngineSettings, FavoritesSync, NoticeCenter,
//!     PreferenceStore, StaticCatalog,
//!     infra::{InMemoryFavoriteStore, InMemoryStorage},
//! };
//! use lexicon_model::{PreferenceSet, UserId, VocabularyEntry};
//!
//! async fn browse() -> lexicon_core::Result<()> {
//!     let source = StaticCatalog::new(vec![
//!         VocabularyEntry::new(1, "Abandon", "meninggalkan"),
//!         VocabularyEntry::new(2, "Ability", "kemampuan"),
//!     ]);
//!     let catalog = Catalog::load(&source)?;
//!     let settings = EngineSettings::default();
//!     let preferences = PreferenceStore::load(
//!         Arc::new(InMemoryStorage::new()),
//!         PreferenceSet::default(),
//!     );
//!     let favorites = FavoritesSync::new(
//!         Arc::new(InMemoryFavoriteStore::new()),
//!         NoticeCenter::new(settings.notice_duration()),
//!     );
//!     favorites.set_identity(Some(&UserId::new("alice"))).await;
//!
//!     let mut view = CatalogView::new(catalog, preferences, favorites, settings)?;
//!     view.set_search_text("ab");
//!     println!("{}", view.page_view().summary);
//!     Ok(())
//! }
//! ```
//!
//! [`FavoriteStore`]: lexicon_contracts::FavoriteStore

#![allow(missing_docs)]

/// Catalog container, filtering and sources
pub mod catalog;

/// Error types for the engine
pub mod error;

/// Favorites synchronizer
pub mod favorites;

/// Press-and-hold / double activation detection
pub mod gesture;

/// Provided collaborator implementations
pub mod infra;

pub mod notice;

/// Page slicing and scroll preservation
pub mod pagination;

pub mod preferences;

pub mod settings;

/// Catalog screen state container
pub mod view;

pub use catalog::{
    Catalog, CatalogFormat, JsonCatalogSource, StaticCatalog,
    TsvCatalogSource, filter_catalog, open_source,
};
pub use error::{LexiconError, Result};
pub use favorites::{
    CommitOutcome, FavoriteOp, FavoritesSync, LoadOutcome, RemoteEdit,
    SyncState, ToggleOutcome,
};
pub use gesture::{CancelReason, GestureConfig, GestureDetector, GestureIntent};
pub use notice::{Notice, NoticeCenter, NoticeId, NoticeLevel};
pub use pagination::{
    Page, PageTransition, PaginationState, paginate, preserved_offset,
};
pub use preferences::PreferenceStore;
pub use settings::EngineSettings;
pub use view::{CatalogRenderer, CatalogView, PageView, RenderedEntry};
