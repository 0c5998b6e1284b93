//! Display preferences backed by durable local storage.
//!
//! Every field lives under its own key as a literal (`"true"`, `"false"`,
//! `"24"`). Fields are read once at startup, each falling back to its default
//! independently, and written back on every change.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use lexicon_contracts::KeyValueStorage;
use lexicon_model::{
    DisplayToggle, PreferenceKey, PreferenceSet, validate_page_size,
};
use tracing::{debug, warn};

use crate::error::Result;

pub struct PreferenceStore<S>
where
    S: KeyValueStorage + ?Sized,
{
    storage: Arc<S>,
    current: PreferenceSet,
}

impl<S> fmt::Debug for PreferenceStore<S>
where
    S: KeyValueStorage + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<S> PreferenceStore<S>
where
    S: KeyValueStorage + ?Sized,
{
    /// Read every field from `storage`, using `defaults` for absent or
    /// unreadable values.
    pub fn load(storage: Arc<S>, defaults: PreferenceSet) -> Self {
        let current = PreferenceSet {
            show_examples: read_field(
                storage.as_ref(),
                PreferenceKey::ShowExamples,
                defaults.show_examples,
            ),
            show_speaker: read_field(
                storage.as_ref(),
                PreferenceKey::ShowSpeaker,
                defaults.show_speaker,
            ),
            show_translation: read_field(
                storage.as_ref(),
                PreferenceKey::ShowTranslation,
                defaults.show_translation,
            ),
            auto_scroll: read_field(
                storage.as_ref(),
                PreferenceKey::AutoScroll,
                defaults.auto_scroll,
            ),
            page_size: read_page_size(storage.as_ref(), defaults.page_size),
        };
        debug!(?current, "preferences loaded");

        Self { storage, current }
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.current
    }

    pub fn get(&self, toggle: DisplayToggle) -> bool {
        self.current.get(toggle)
    }

    /// Flip `toggle` and persist it. The in-memory value changes even when
    /// the write fails.
    pub fn toggle(&mut self, toggle: DisplayToggle) -> Result<bool> {
        let value = self.current.flip(toggle);
        self.persist(toggle.key())?;
        Ok(value)
    }

    pub fn set(&mut self, toggle: DisplayToggle, value: bool) -> Result<()> {
        self.current.set(toggle, value);
        self.persist(toggle.key())
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.current.page_size = validate_page_size(page_size)?;
        self.persist(PreferenceKey::PageSize)
    }

    fn persist(&self, key: PreferenceKey) -> Result<()> {
        let value = self.current.stored_value(key);
        self.storage
            .set_item(key.storage_key(), &value)
            .inspect_err(|err| {
                warn!(key = key.storage_key(), %err, "failed to persist preference")
            })?;
        Ok(())
    }
}

fn read_field<S, T>(storage: &S, key: PreferenceKey, default: T) -> T
where
    S: KeyValueStorage + ?Sized,
    T: FromStr + Copy,
{
    let Some(raw) = storage.get_item(key.storage_key()) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(
                key = key.storage_key(),
                value = %raw,
                "ignoring unreadable stored preference"
            );
            default
        }
    }
}

fn read_page_size<S>(storage: &S, default: usize) -> usize
where
    S: KeyValueStorage + ?Sized,
{
    let size = read_field(storage, PreferenceKey::PageSize, default);
    validate_page_size(size).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryStorage;
    use lexicon_contracts::StorageError;

    #[test]
    fn absent_fields_take_defaults_independently() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.set_item("showSpeaker", "false").unwrap();
        storage.set_item("itemsPerPage", "24").unwrap();

        let store = PreferenceStore::load(storage, PreferenceSet::default());
        let prefs = store.preferences();
        assert!(prefs.show_examples);
        assert!(!prefs.show_speaker);
        assert!(prefs.show_translation);
        assert!(prefs.auto_scroll);
        assert_eq!(prefs.page_size, 24);
    }

    #[test]
    fn unreadable_values_fall_back() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.set_item("autoScroll", "yes please").unwrap();
        storage.set_item("itemsPerPage", "0").unwrap();

        let defaults = PreferenceSet {
            page_size: 12,
            ..PreferenceSet::default()
        };
        let store = PreferenceStore::load(storage, defaults);
        assert!(store.preferences().auto_scroll);
        assert_eq!(store.preferences().page_size, 12);
    }

    #[test]
    fn toggle_writes_literal_value() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut store =
            PreferenceStore::load(Arc::clone(&storage), PreferenceSet::default());

        assert!(!store.toggle(DisplayToggle::Examples).unwrap());
        assert_eq!(storage.get_item("showExamples").as_deref(), Some("false"));

        store.set_page_size(48).unwrap();
        assert_eq!(storage.get_item("itemsPerPage").as_deref(), Some("48"));

        let reloaded = PreferenceStore::load(storage, PreferenceSet::default());
        assert!(!reloaded.preferences().show_examples);
        assert_eq!(reloaded.preferences().page_size, 48);
    }

    #[test]
    fn zero_page_size_is_rejected_without_writing() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut store =
            PreferenceStore::load(Arc::clone(&storage), PreferenceSet::default());
        assert!(store.set_page_size(0).is_err());
        assert_eq!(storage.get_item("itemsPerPage"), None);
    }

    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, key: &str, _value: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError::QuotaExceeded { key: key.to_string() })
        }
    }

    #[test]
    fn failed_write_keeps_in_memory_value() {
        let mut store =
            PreferenceStore::load(Arc::new(ReadOnlyStorage), PreferenceSet::default());
        assert!(store.toggle(DisplayToggle::AutoScroll).is_err());
        assert!(!store.preferences().auto_scroll);
    }
}
