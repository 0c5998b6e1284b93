//! Local JSON documents standing in for browser storage and the remote
//! favorites database.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lexicon_contracts::{
    FavoriteStore, KeyValueStorage, StorageError, StoreError,
};
use lexicon_model::{EntryId, UserId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Key/value storage persisted as a flat JSON object of strings.
///
/// The whole file is rewritten on every `set_item` through a sibling
/// temporary file and a rename.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    items: Mutex<HashMap<String, String>>,
}

impl JsonFileStorage {
    /// Open `path`, starting empty when the file does not exist.
    ///
    /// A file that exists but cannot be parsed is an error rather than
    /// silently discarded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => HashMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                StorageError::Serialization(format!(
                    "{}: {err}",
                    path.display()
                ))
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "preference file absent");
                HashMap::new()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, items: &HashMap<String, String>) -> Result<(), StorageError> {
        let ordered: BTreeMap<&String, &String> = items.iter().collect();
        let body = serde_json::to_string_pretty(&ordered)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        write_atomically(&self.path, body.as_bytes())?;
        Ok(())
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock();
        items.insert(key.to_owned(), value.to_owned());
        self.flush(&items)
    }
}

fn write_atomically(path: &Path, body: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = temp_sibling(path);
    std::fs::write(&tmp, body)?;
    std::fs::rename(&tmp, path)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FavoritesDocument {
    #[serde(default)]
    users: BTreeMap<String, UserRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserRecord {
    #[serde(default)]
    favorites: BTreeSet<EntryId>,
}

/// Favorite store persisted as `{"users": {"<uid>": {"favorites": [..]}}}`.
///
/// Every edit reads the document, changes one user's set and writes it
/// back while holding an async lock, so concurrent edits from one process
/// never overwrite each other.
#[derive(Debug)]
pub struct JsonFileFavoriteStore {
    path: PathBuf,
    lock: tokio::sync::Mutex<()>,
}

impl JsonFileFavoriteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_document(&self) -> Result<FavoritesDocument, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(FavoritesDocument::default()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                StoreError::Malformed(format!("{}: {err}", self.path.display()))
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Ok(FavoritesDocument::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn store_document(
        &self,
        document: &FavoritesDocument,
    ) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(document)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = temp_sibling(&self.path);
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn edit(
        &self,
        user: &UserId,
        apply: impl FnOnce(&mut BTreeSet<EntryId>),
    ) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load_document().await?;
        let record = document.users.entry(user.as_str().to_owned()).or_default();
        apply(&mut record.favorites);
        self.store_document(&document).await.inspect_err(|err| {
            warn!(user = %user, error = %err, "failed to write favorites");
        })
    }
}

#[async_trait]
impl FavoriteStore for JsonFileFavoriteStore {
    async fn read(&self, user: &UserId) -> Result<BTreeSet<EntryId>, StoreError> {
        let _guard = self.lock.lock().await;
        let document = self.load_document().await?;
        Ok(document
            .users
            .get(user.as_str())
            .map(|record| record.favorites.clone())
            .unwrap_or_default())
    }

    async fn add_to_set(
        &self,
        user: &UserId,
        entry: EntryId,
    ) -> Result<(), StoreError> {
        self.edit(user, |ids| {
            ids.insert(entry);
        })
        .await
    }

    async fn remove_from_set(
        &self,
        user: &UserId,
        entry: EntryId,
    ) -> Result<(), StoreError> {
        self.edit(user, |ids| {
            ids.remove(&entry);
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn storage_survives_reopen() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("prefs.json");

        let storage = JsonFileStorage::open(&path).expect("open");
        storage.set_item("showExamples", "false").expect("write");
        storage.set_item("itemsPerPage", "24").expect("write");
        drop(storage);

        let reopened = JsonFileStorage::open(&path).expect("reopen");
        assert_eq!(reopened.get_item("showExamples").as_deref(), Some("false"));
        assert_eq!(reopened.get_item("itemsPerPage").as_deref(), Some("24"));
        assert!(!temp_sibling(&path).exists());
    }

    #[test]
    fn storage_rejects_corrupt_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").expect("seed");

        let err = JsonFileStorage::open(&path).expect_err("corrupt file");
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn favorite_edits_touch_only_one_user() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonFileFavoriteStore::new(dir.path().join("favorites.json"));
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");

        store.add_to_set(&alice, EntryId(1)).await.expect("add");
        store.add_to_set(&alice, EntryId(4)).await.expect("add");
        store.add_to_set(&bob, EntryId(2)).await.expect("add");
        store.remove_from_set(&alice, EntryId(1)).await.expect("remove");

        assert_eq!(
            store.read(&alice).await.expect("read"),
            BTreeSet::from([EntryId(4)])
        );
        assert_eq!(
            store.read(&bob).await.expect("read"),
            BTreeSet::from([EntryId(2)])
        );
        assert!(
            store
                .read(&UserId::new("carol"))
                .await
                .expect("read")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn malformed_document_is_reported() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{\"users\": 7}").expect("seed");

        let store = JsonFileFavoriteStore::new(&path);
        let err = store
            .read(&UserId::new("alice"))
            .await
            .expect_err("malformed");
        assert!(matches!(err, StoreError::Malformed(_)));
    }
}
