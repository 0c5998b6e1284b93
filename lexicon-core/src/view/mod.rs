//! The catalog screen as one state container.
//!
//! [`CatalogView`] owns the catalog, the filter query, pagination, the
//! preference store and the favorites synchronizer, and produces a
//! [`PageView`] for whatever front end renders it. It holds no globals; hosts
//! construct as many independent views as they need.

pub mod summary;

use std::fmt;

use lexicon_contracts::{FavoriteStore, KeyValueStorage, ScrollSurface};
use lexicon_model::{
    DisplayToggle, EntryId, FilterQuery, FilterScope, Letter, UserId,
    VocabularyEntry,
};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::favorites::{FavoritesSync, ToggleOutcome};
use crate::gesture::GestureIntent;
use crate::notice::{Notice, NoticeCenter};
use crate::pagination::{PageTransition, PaginationState, paginate};
use crate::preferences::PreferenceStore;
use crate::settings::EngineSettings;

pub use summary::{CLEAR_FILTERS_LABEL, EMPTY_RESULTS_MESSAGE, results_summary};

/// Per-entry display switches taken from the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    pub show_examples: bool,
    pub show_speaker: bool,
    pub show_translation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub entry: VocabularyEntry,
    pub favorite: bool,
    pub display: DisplayFlags,
}

/// Everything a front end needs to draw the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub entries: Vec<RenderedEntry>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub filtered_count: usize,
    pub catalog_count: usize,
    pub summary: String,
    /// Pagination controls are hidden when everything fits on one page.
    pub show_pagination: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub empty_message: Option<&'static str>,
    pub identity: Option<UserId>,
    pub notices: Vec<Notice>,
}

/// Front-end hook that draws a [`PageView`].
pub trait CatalogRenderer {
    fn render(&mut self, view: &PageView);
}

pub struct CatalogView<R, S>
where
    R: FavoriteStore + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    catalog: Catalog,
    query: FilterQuery,
    pagination: PaginationState,
    preferences: PreferenceStore<S>,
    favorites: FavoritesSync<R>,
    settings: EngineSettings,
}

impl<R, S> fmt::Debug for CatalogView<R, S>
where
    R: FavoriteStore + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogView")
            .field("entries", &self.catalog.len())
            .field("query", &self.query)
            .field("pagination", &self.pagination)
            .field("preferences", &self.preferences)
            .field("favorites", &self.favorites)
            .finish()
    }
}

impl<R, S> CatalogView<R, S>
where
    R: FavoriteStore + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    /// Page size comes from the stored preference.
    pub fn new(
        catalog: Catalog,
        preferences: PreferenceStore<S>,
        favorites: FavoritesSync<R>,
        settings: EngineSettings,
    ) -> Result<Self> {
        let pagination = PaginationState::new(preferences.preferences().page_size)?;
        Ok(Self {
            catalog,
            query: FilterQuery::default(),
            pagination,
            preferences,
            favorites,
            settings,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.preferences
    }

    pub fn favorites(&self) -> &FavoritesSync<R> {
        &self.favorites
    }

    pub fn notices(&self) -> &NoticeCenter {
        self.favorites.notices()
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Entries surviving the current query, in catalog order.
    pub fn filtered(&self) -> Vec<&VocabularyEntry> {
        self.favorites
            .with_ids(|ids| self.catalog.filter(&self.query, ids))
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.query_changed();
    }

    /// Selecting the letter that is already selected clears it.
    pub fn select_letter(&mut self, letter: Letter) {
        self.query.letter = if self.query.letter == Some(letter) {
            None
        } else {
            Some(letter)
        };
        self.query_changed();
    }

    pub fn clear_letter(&mut self) {
        self.query.letter = None;
        self.query_changed();
    }

    /// Clear search text and letter. The scope is left alone.
    pub fn clear_filters(&mut self) {
        self.query.search_text.clear();
        self.query.letter = None;
        self.query_changed();
    }

    pub fn set_scope(&mut self, scope: FilterScope) {
        self.query.scope = scope;
        self.query_changed();
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.pagination.set_page_size(page_size)?;
        self.preferences.set_page_size(page_size)
    }

    pub fn toggle_preference(&mut self, toggle: DisplayToggle) -> Result<bool> {
        self.preferences.toggle(toggle)
    }

    /// Move to `page`, clamped, rendering into `host` and applying the
    /// scroll behavior chosen by the auto-scroll preference. Returns the
    /// page now shown; selecting the current page does nothing.
    pub fn set_page<H>(&mut self, page: usize, host: &mut H) -> usize
    where
        H: ScrollSurface + CatalogRenderer + ?Sized,
    {
        let len = self.filtered_len();
        let target = page.clamp(1, self.pagination.total_pages(len));
        let current = self.pagination.effective_page(len);
        if target == current {
            return current;
        }

        let transition = PageTransition::begin(
            host,
            self.preferences.preferences().auto_scroll,
            &self.settings.results_anchor,
        );
        self.pagination.set_page(target, len);
        debug!(from = current, to = target, "page changed");
        self.render(host);
        transition.finish(host);
        target
    }

    /// No-op on the last page.
    pub fn next_page<H>(&mut self, host: &mut H) -> usize
    where
        H: ScrollSurface + CatalogRenderer + ?Sized,
    {
        let current = self.pagination.effective_page(self.filtered_len());
        self.set_page(current.saturating_add(1), host)
    }

    /// No-op on the first page.
    pub fn previous_page<H>(&mut self, host: &mut H) -> usize
    where
        H: ScrollSurface + CatalogRenderer + ?Sized,
    {
        let current = self.pagination.effective_page(self.filtered_len());
        self.set_page(current.saturating_sub(1), host)
    }

    pub fn page_view(&self) -> PageView {
        let prefs = self.preferences.preferences();
        let display = DisplayFlags {
            show_examples: prefs.show_examples,
            show_speaker: prefs.show_speaker,
            show_translation: prefs.show_translation,
        };

        let identity = self.favorites.identity();
        let notices = self.notices().active();

        self.favorites.with_ids(|ids| {
            let filtered = self.catalog.filter(&self.query, ids);
            let page = paginate(&filtered, &self.pagination);
            let entries = page
                .items
                .iter()
                .map(|entry| RenderedEntry {
                    entry: (*entry).clone(),
                    favorite: ids.contains(&entry.id),
                    display,
                })
                .collect();

            PageView {
                entries,
                current_page: page.current_page,
                total_pages: page.total_pages,
                page_size: self.pagination.page_size(),
                filtered_count: page.total_items,
                catalog_count: self.catalog.len(),
                summary: results_summary(
                    page.total_items,
                    self.query.effective_letter(),
                    self.query.search_term(),
                ),
                show_pagination: page.is_visible(),
                has_previous: page.current_page > 1,
                has_next: page.current_page < page.total_pages,
                empty_message: filtered.is_empty().then_some(EMPTY_RESULTS_MESSAGE),
                identity,
                notices,
            }
        })
    }

    pub fn render<H>(&self, renderer: &mut H)
    where
        H: CatalogRenderer + ?Sized,
    {
        renderer.render(&self.page_view());
    }

    fn query_changed(&mut self) {
        self.pagination.reset();
        debug!(query = ?self.query, "filter changed");
    }

    fn favorites_changed(&mut self) {
        if self.query.scope == FilterScope::FavoritesOnly {
            let len = self.filtered_len();
            self.pagination.revalidate(len);
        }
    }
}

impl<R, S> CatalogView<R, S>
where
    R: FavoriteStore + ?Sized + 'static,
    S: KeyValueStorage + ?Sized,
{
    pub fn toggle_favorite(&mut self, entry: EntryId) -> ToggleOutcome {
        let outcome = self.favorites.toggle_favorite(entry);
        self.favorites_changed();
        outcome
    }

    pub fn handle_gesture(&mut self, intent: GestureIntent) -> ToggleOutcome {
        match intent {
            GestureIntent::ToggleFavorite(entry) => self.toggle_favorite(entry),
        }
    }
}
