use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use lexicon_contracts::{FavoriteStore, StoreError};
use lexicon_model::{EntryId, Identity, UserId};
use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::state::{
    CommitOutcome, FavoriteOp, FavoritesState, LoadOutcome, LoadTicket,
    RemoteEdit, SyncState,
};
use crate::error::Result;
use crate::notice::{NoticeCenter, SIGN_IN_REQUIRED};

/// Result of [`FavoritesSync::toggle_favorite`].
#[derive(Debug)]
pub enum ToggleOutcome {
    /// Local set already updated; `remote` resolves once the store answers.
    Committed {
        edit: RemoteEdit,
        remote: JoinHandle<Result<()>>,
    },
    SignInRequired,
}

/// Keeps the current user's favorite set and mirrors edits to a
/// [`FavoriteStore`].
///
/// Every identity transition bumps a generation counter; a remote read
/// issued under an older generation is discarded when it resolves.
pub struct FavoritesSync<R>
where
    R: FavoriteStore + ?Sized,
{
    store: Arc<R>,
    state: Arc<RwLock<FavoritesState>>,
    notices: NoticeCenter,
}

impl<R> Clone for FavoritesSync<R>
where
    R: FavoriteStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            state: Arc::clone(&self.state),
            notices: self.notices.clone(),
        }
    }
}

impl<R> fmt::Debug for FavoritesSync<R>
where
    R: FavoriteStore + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store_type = std::any::type_name_of_val(self.store.as_ref());
        let mut debug = f.debug_struct("FavoritesSync");
        debug.field("store", &store_type);
        match self.state.try_read() {
            Some(state) => debug
                .field("phase", &state.phase)
                .field("favorites", &state.ids.len())
                .field("generation", &state.generation),
            None => debug.field("state", &"<locked>"),
        };
        debug.finish()
    }
}

impl<R> FavoritesSync<R>
where
    R: FavoriteStore + ?Sized,
{
    pub fn new(store: Arc<R>, notices: NoticeCenter) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(FavoritesState::default())),
            notices,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state.read().phase.clone()
    }

    pub fn identity(&self) -> Option<UserId> {
        self.state.read().phase.identity().cloned()
    }

    pub fn ids(&self) -> BTreeSet<EntryId> {
        self.state.read().ids.clone()
    }

    pub fn is_favorite(&self, entry: EntryId) -> bool {
        self.state.read().ids.contains(&entry)
    }

    /// Run `f` against the current set without cloning it.
    pub fn with_ids<T>(&self, f: impl FnOnce(&BTreeSet<EntryId>) -> T) -> T {
        f(&self.state.read().ids)
    }

    pub fn notices(&self) -> &NoticeCenter {
        &self.notices
    }

    /// Move to the state implied by `identity`, clearing the set.
    ///
    /// Returns the ticket for the remote read the caller must issue, or
    /// `None` when signed out or when the identity is unchanged.
    pub fn begin_identity(&self, identity: Option<&UserId>) -> Option<LoadTicket> {
        let mut state = self.state.write();
        if state.phase.identity() == identity {
            return None;
        }

        state.generation += 1;
        state.ids.clear();
        state.journal.clear();

        match identity {
            None => {
                info!("signed out; favorites cleared");
                state.phase = SyncState::Anonymous;
                None
            }
            Some(user) => {
                info!(user = %user, generation = state.generation, "loading favorites");
                state.phase = SyncState::Loading(user.clone());
                Some(LoadTicket {
                    user: user.clone(),
                    generation: state.generation,
                })
            }
        }
    }

    /// Apply the outcome of the read issued for `ticket`.
    ///
    /// Toggles committed while loading are replayed on top of the fetched
    /// set. A failed read keeps the local set and raises an error notice.
    pub fn apply_loaded(
        &self,
        ticket: &LoadTicket,
        result: std::result::Result<BTreeSet<EntryId>, StoreError>,
    ) -> LoadOutcome {
        let mut state = self.state.write();
        if state.generation != ticket.generation {
            debug!(
                user = %ticket.user,
                ticket = ticket.generation,
                current = state.generation,
                "discarding stale favorites read"
            );
            return LoadOutcome::Stale;
        }

        let journal = std::mem::take(&mut state.journal);
        state.phase = SyncState::Synced(ticket.user.clone());
        match result {
            Ok(remote) => {
                state.ids = remote;
                for (entry, op) in journal {
                    op.apply(&mut state.ids, entry);
                }
                let favorites = state.ids.len();
                debug!(user = %ticket.user, favorites, "favorites loaded");
                LoadOutcome::Applied { favorites }
            }
            Err(err) => {
                drop(state);
                warn!(user = %ticket.user, error = %err, "failed to load favorites");
                self.notices.error(format!("Could not load favorites: {err}"));
                LoadOutcome::Failed
            }
        }
    }

    /// Issue the remote read for `ticket` and apply its result.
    pub async fn load(&self, ticket: LoadTicket) -> LoadOutcome {
        let result = self.store.read(&ticket.user).await;
        self.apply_loaded(&ticket, result)
    }

    /// Transition to `identity` and wait for its favorites.
    pub async fn set_identity(
        &self,
        identity: Option<&UserId>,
    ) -> Option<LoadOutcome> {
        let ticket = self.begin_identity(identity)?;
        Some(self.load(ticket).await)
    }

    /// Local half of a toggle: flip membership now and describe the remote
    /// edit that must follow.
    pub fn commit_toggle(&self, entry: EntryId) -> CommitOutcome {
        let mut state = self.state.write();
        let Some(user) = state.phase.identity().cloned() else {
            drop(state);
            debug!(entry = %entry, "favorite toggle without identity");
            self.notices.info(SIGN_IN_REQUIRED);
            return CommitOutcome::SignInRequired;
        };

        let op = FavoriteOp::flip_of(&state.ids, entry);
        op.apply(&mut state.ids, entry);
        if state.phase.is_loading() {
            state.journal.push((entry, op));
        }
        debug!(user = %user, entry = %entry, ?op, "favorite committed locally");
        CommitOutcome::Committed(RemoteEdit { user, entry, op })
    }

    /// Remote half of a toggle. Failures are reported, never rolled back.
    pub async fn reconcile(&self, edit: RemoteEdit) -> Result<()> {
        let result = match edit.op {
            FavoriteOp::Add => self.store.add_to_set(&edit.user, edit.entry).await,
            FavoriteOp::Remove => {
                self.store.remove_from_set(&edit.user, edit.entry).await
            }
        };
        if let Err(err) = &result {
            warn!(
                user = %edit.user,
                entry = %edit.entry,
                op = ?edit.op,
                error = %err,
                "favorite sync failed"
            );
            self.notices.error(format!("Could not sync favorites: {err}"));
        }
        Ok(result?)
    }
}

impl<R> FavoritesSync<R>
where
    R: FavoriteStore + ?Sized + 'static,
{
    /// Commit locally and push the remote edit in the background.
    pub fn toggle_favorite(&self, entry: EntryId) -> ToggleOutcome {
        match self.commit_toggle(entry) {
            CommitOutcome::SignInRequired => ToggleOutcome::SignInRequired,
            CommitOutcome::Committed(edit) => {
                let sync = self.clone();
                let pending = edit.clone();
                let remote = tokio::spawn(async move { sync.reconcile(pending).await });
                ToggleOutcome::Committed { edit, remote }
            }
        }
    }

    /// Follow identity changes from `identities` until the sender closes.
    ///
    /// Each transition's read runs in its own task, so a slow read never
    /// delays the next transition; stale reads drop out via the generation
    /// check.
    pub fn watch_identity(
        &self,
        mut identities: watch::Receiver<Option<Identity>>,
    ) -> JoinHandle<()> {
        let sync = self.clone();
        tokio::spawn(async move {
            loop {
                let user = identities
                    .borrow_and_update()
                    .as_ref()
                    .map(|identity| identity.id.clone());
                if let Some(ticket) = sync.begin_identity(user.as_ref()) {
                    let loader = sync.clone();
                    tokio::spawn(async move {
                        loader.load(ticket).await;
                    });
                }
                if identities.changed().await.is_err() {
                    debug!("identity channel closed");
                    break;
                }
            }
        })
    }
}
