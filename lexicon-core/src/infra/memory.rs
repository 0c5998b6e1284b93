use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use lexicon_contracts::{
    FavoriteStore, KeyValueStorage, StorageError, StoreError,
};
use lexicon_model::{EntryId, UserId};
use parking_lot::RwLock;
use tokio::sync::Mutex;

/// Favorite sets held in process, keyed by user.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFavoriteStore {
    documents: Arc<Mutex<HashMap<UserId, BTreeSet<EntryId>>>>,
}

impl InMemoryFavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user's remote set, replacing any previous record.
    pub async fn seed(
        &self,
        user: &UserId,
        ids: impl IntoIterator<Item = EntryId>,
    ) {
        let mut guard = self.documents.lock().await;
        guard.insert(user.clone(), ids.into_iter().collect());
    }

    /// Current remote set for `user`, empty when absent.
    pub async fn snapshot(&self, user: &UserId) -> BTreeSet<EntryId> {
        let guard = self.documents.lock().await;
        guard.get(user).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl FavoriteStore for InMemoryFavoriteStore {
    async fn read(&self, user: &UserId) -> Result<BTreeSet<EntryId>, StoreError> {
        Ok(self.snapshot(user).await)
    }

    async fn add_to_set(
        &self,
        user: &UserId,
        entry: EntryId,
    ) -> Result<(), StoreError> {
        let mut guard = self.documents.lock().await;
        guard.entry(user.clone()).or_default().insert(entry);
        Ok(())
    }

    async fn remove_from_set(
        &self,
        user: &UserId,
        entry: EntryId,
    ) -> Result<(), StoreError> {
        let mut guard = self.documents.lock().await;
        if let Some(ids) = guard.get_mut(user) {
            ids.remove(&entry);
        }
        Ok(())
    }
}

/// String key/value storage held in process.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let items = items
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_edits_are_idempotent() {
        let store = InMemoryFavoriteStore::new();
        let user = UserId::new("alice");

        store.add_to_set(&user, EntryId(3)).await.expect("add");
        store.add_to_set(&user, EntryId(3)).await.expect("add again");
        assert_eq!(store.read(&user).await.expect("read").len(), 1);

        store.remove_from_set(&user, EntryId(3)).await.expect("remove");
        store
            .remove_from_set(&user, EntryId(3))
            .await
            .expect("remove again");
        assert!(store.read(&user).await.expect("read").is_empty());
    }

    #[tokio::test]
    async fn missing_user_reads_empty() {
        let store = InMemoryFavoriteStore::new();
        let ids = store.read(&UserId::new("nobody")).await.expect("read");
        assert!(ids.is_empty());
    }

    #[test]
    fn storage_round_trips_strings() {
        let storage = InMemoryStorage::with_items([("showSpeaker", "false")]);
        assert_eq!(storage.get_item("showSpeaker").as_deref(), Some("false"));
        storage.set_item("itemsPerPage", "24").expect("write");
        assert_eq!(storage.get_item("itemsPerPage").as_deref(), Some("24"));
        assert_eq!(storage.get_item("missing"), None);
    }
}
