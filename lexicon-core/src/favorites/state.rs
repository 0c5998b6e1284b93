use std::collections::BTreeSet;

use lexicon_model::{EntryId, UserId};

/// Where the synchronizer stands for the current identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    /// No signed-in user; the favorite set is always empty.
    #[default]
    Anonymous,
    /// Waiting for the remote set of this user.
    Loading(UserId),
    /// Remote set received (or its read failed and local state took over).
    Synced(UserId),
}

impl SyncState {
    pub fn identity(&self) -> Option<&UserId> {
        match self {
            SyncState::Anonymous => None,
            SyncState::Loading(user) | SyncState::Synced(user) => Some(user),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SyncState::Loading(_))
    }
}

/// Set-membership edit, idempotent on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteOp {
    Add,
    Remove,
}

impl FavoriteOp {
    /// The edit that flips `entry` in `ids`.
    pub fn flip_of(ids: &BTreeSet<EntryId>, entry: EntryId) -> Self {
        if ids.contains(&entry) {
            FavoriteOp::Remove
        } else {
            FavoriteOp::Add
        }
    }

    pub fn apply(self, ids: &mut BTreeSet<EntryId>, entry: EntryId) {
        match self {
            FavoriteOp::Add => {
                ids.insert(entry);
            }
            FavoriteOp::Remove => {
                ids.remove(&entry);
            }
        }
    }
}

/// Remote half of a committed toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEdit {
    pub user: UserId,
    pub entry: EntryId,
    pub op: FavoriteOp,
}

/// Result of the synchronous local-commit phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(RemoteEdit),
    /// No identity: a sign-in notice was raised and nothing changed.
    SignInRequired,
}

/// Identifies one remote read issued for an identity transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub user: UserId,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { favorites: usize },
    /// A newer identity transition started before the read resolved.
    Stale,
    /// The read failed; local state was kept and an error notice raised.
    Failed,
}

#[derive(Debug, Default)]
pub(crate) struct FavoritesState {
    pub(crate) phase: SyncState,
    pub(crate) ids: BTreeSet<EntryId>,
    pub(crate) generation: u64,
    /// Toggles committed while `Loading`, replayed onto the fetched set.
    pub(crate) journal: Vec<(EntryId, FavoriteOp)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_of_reflects_membership() {
        let mut ids = BTreeSet::from([EntryId(1)]);
        assert_eq!(FavoriteOp::flip_of(&ids, EntryId(1)), FavoriteOp::Remove);
        assert_eq!(FavoriteOp::flip_of(&ids, EntryId(2)), FavoriteOp::Add);

        FavoriteOp::Add.apply(&mut ids, EntryId(1));
        assert_eq!(ids.len(), 1);
        FavoriteOp::Remove.apply(&mut ids, EntryId(1));
        FavoriteOp::Remove.apply(&mut ids, EntryId(1));
        assert!(ids.is_empty());
    }

    #[test]
    fn anonymous_has_no_identity() {
        assert_eq!(SyncState::Anonymous.identity(), None);
        let user = UserId::new("alice");
        assert_eq!(SyncState::Loading(user.clone()).identity(), Some(&user));
        assert!(SyncState::Loading(user).is_loading());
    }
}
