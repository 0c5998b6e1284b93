use std::collections::BTreeSet;

use async_trait::async_trait;
use lexicon_model::{EntryId, UserId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("favorite store unavailable: {0}")]
    Unavailable(String),
    #[error("permission denied for user {0}")]
    PermissionDenied(UserId),
    #[error("malformed favorites document: {0}")]
    Malformed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Remote document store holding one favorite-id set per user.
///
/// Every operation must be idempotent: repeating an add or a remove has no
/// additional effect. Implementations must never replace the whole set from
/// `add_to_set`/`remove_from_set`, since other devices may be editing it.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Full set for `user`, empty when no record exists yet.
    async fn read(&self, user: &UserId) -> Result<BTreeSet<EntryId>, StoreError>;

    async fn add_to_set(
        &self,
        user: &UserId,
        entry: EntryId,
    ) -> Result<(), StoreError>;

    async fn remove_from_set(
        &self,
        user: &UserId,
        entry: EntryId,
    ) -> Result<(), StoreError>;
}
