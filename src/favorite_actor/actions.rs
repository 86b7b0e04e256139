//! Custom actions for [`FavoriteToggle`](crate::model::FavoriteToggle) sessions.

use crate::model::{FavoriteRef, FoodId, RequestSeq};

/// Payload for opening a favorite session on a food.
#[derive(Debug, Clone)]
pub struct FavoriteCreate {
    pub food_id: FoodId,
}

#[derive(Debug, Clone)]
pub enum FavoriteAction {
    /// Flips the flag at once and syncs in the background. The snapshot is what gets
    /// stored when the food becomes a favorite; removing works without one.
    Toggle(Option<FavoriteRef>),
    /// Deferred outcome of a toggle's network call.
    SyncResolved { seq: RequestSeq, ok: bool },
    /// Re-reads the favorites collection and adopts it unless a toggle is pending.
    Reconcile,
}

/// Results from FavoriteActions - variants match 1:1 with FavoriteAction
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteActionResult {
    /// The new flag.
    Toggle(bool),
    /// Whether the outcome belonged to the latest toggle.
    SyncResolved(bool),
    /// Whether the local flag had drifted from the server.
    Reconcile(bool),
}
