//! Per-user favorites with optimistic local updates.
//!
//! Local state is the user's authoritative intent: a toggle is committed to
//! the in-memory set immediately and the matching remote set edit is sent
//! afterwards on a best-effort basis. A failed remote edit is reported
//! through the notice center and never rolled back.

pub mod state;
pub mod sync;

pub use state::{
    CommitOutcome, FavoriteOp, LoadOutcome, LoadTicket, RemoteEdit, SyncState,
};
pub use sync::{FavoritesSync, ToggleOutcome};
