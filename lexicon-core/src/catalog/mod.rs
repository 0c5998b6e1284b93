//! The resident vocabulary catalog and its filter.

pub mod filter;
pub mod sources;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use lexicon_contracts::{CatalogError, CatalogSource};
use lexicon_model::{EntryId, FilterQuery, VocabularyEntry};
use tracing::debug;

pub use filter::filter_catalog;
pub use sources::{
    CatalogFormat, JsonCatalogSource, StaticCatalog, TsvCatalogSource,
    open_source,
};

/// Immutable, ordered catalog shared by every view of the engine.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Arc<[VocabularyEntry]>,
    index: Arc<HashMap<EntryId, usize>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids. Order is kept as given.
    pub fn new(entries: Vec<VocabularyEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id, position).is_some() {
                return Err(CatalogError::DuplicateId(entry.id));
            }
        }

        Ok(Self {
            entries: entries.into(),
            index: Arc::new(index),
        })
    }

    pub fn load<S>(source: &S) -> Result<Self, CatalogError>
    where
        S: CatalogSource + ?Sized,
    {
        let entries = source.load()?;
        debug!(entries = entries.len(), "catalog loaded");
        Self::new(entries)
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&VocabularyEntry> {
        self.index.get(&id).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn filter(
        &self,
        query: &FilterQuery,
        favorites: &BTreeSet<EntryId>,
    ) -> Vec<&VocabularyEntry> {
        filter_catalog(&self.entries, query, favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![
            VocabularyEntry::new(1, "Able", "mampu"),
            VocabularyEntry::new(1, "About", "tentang"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == EntryId(1)));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::new(vec![
            VocabularyEntry::new(10, "Able", "mampu"),
            VocabularyEntry::new(20, "About", "tentang"),
        ])
        .unwrap();
        assert_eq!(catalog.get(EntryId(20)).map(|e| e.word.as_str()), Some("About"));
        assert!(catalog.get(EntryId(30)).is_none());
        assert_eq!(catalog.len(), 2);
    }
}
