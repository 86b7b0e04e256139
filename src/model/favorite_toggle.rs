//! # Favorite Toggle State
//!
//! A favorite flag for one food. Toggling flips the flag at once and marks it
//! `Pending`; the network result only moves the sync state, and only if it answers the
//! latest toggle. The flag is never rolled back on failure.

use crate::model::{FavoriteRef, FoodId, RequestSeq, RequestSequence};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for favorite toggle sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteToggleId(pub u32);

impl From<u32> for FavoriteToggleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for FavoriteToggleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "favorite_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Pending,
    Confirmed,
    Failed,
}

/// The request a toggle has to send.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteChange {
    Add(FavoriteRef),
    Remove(FoodId),
}

#[derive(Debug, Clone)]
pub struct FavoriteToggle {
    pub id: FavoriteToggleId,
    pub food_id: FoodId,
    pub is_favorite: bool,
    pub sync: SyncState,
    requests: RequestSequence,
}

impl FavoriteToggle {
    pub fn new(id: FavoriteToggleId, food_id: FoodId) -> Self {
        Self {
            id,
            food_id,
            is_favorite: false,
            sync: SyncState::Confirmed,
            requests: RequestSequence::default(),
        }
    }

    /// Initial membership from the favorites collection.
    pub fn load(&mut self, favorites: &[FavoriteRef]) {
        self.is_favorite = favorites.iter().any(|favorite| favorite.id == self.food_id);
        self.sync = SyncState::Confirmed;
    }

    /// Flips the flag and returns the tagged request to send.
    ///
    /// Removing only needs the food id. Adding stores `snapshot`, so without one the
    /// toggle is refused and nothing changes.
    pub fn toggle(&mut self, snapshot: Option<FavoriteRef>) -> Option<(RequestSeq, FavoriteChange)> {
        let change = if self.is_favorite {
            FavoriteChange::Remove(self.food_id)
        } else {
            FavoriteChange::Add(snapshot?)
        };
        self.is_favorite = !self.is_favorite;
        self.sync = SyncState::Pending;
        Some((self.requests.issue(), change))
    }

    /// Records a network result. Returns `false` for a result superseded by a later toggle.
    pub fn resolve(&mut self, seq: RequestSeq, ok: bool) -> bool {
        if !self.requests.is_latest(seq) {
            return false;
        }
        self.sync = if ok {
            SyncState::Confirmed
        } else {
            SyncState::Failed
        };
        true
    }

    /// Adopts the server's membership unless a toggle is in flight. Returns whether the
    /// local flag had drifted.
    pub fn reconcile(&mut self, favorites: &[FavoriteRef]) -> bool {
        if self.sync == SyncState::Pending {
            return false;
        }
        let on_server = favorites.iter().any(|favorite| favorite.id == self.food_id);
        let drifted = on_server != self.is_favorite;
        self.is_favorite = on_server;
        self.sync = SyncState::Confirmed;
        drifted
    }
}
