//! ActorEntity trait implementation for [`FavoriteToggle`].
//!
//! The initial membership and reconciliation are awaited. Toggles are not: the flag
//! flips inside the action and the create/delete call runs as a deferred action whose
//! outcome only updates the sync state.

use super::{FavoriteAction, FavoriteActionResult, FavoriteCreate, FavoriteError};
use crate::catalog::SharedCatalog;
use crate::framework::{ActorEntity, Mailbox};
use crate::model::{FavoriteChange, FavoriteToggle, FavoriteToggleId};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Collaborators of favorite sessions.
#[derive(Clone)]
pub struct FavoriteContext {
    pub catalog: SharedCatalog,
}

impl FavoriteContext {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ActorEntity for FavoriteToggle {
    type Id = FavoriteToggleId;
    type Create = FavoriteCreate;
    type Action = FavoriteAction;
    type ActionResult = FavoriteActionResult;
    type Context = FavoriteContext;
    type Error = FavoriteError;

    fn from_create_params(id: FavoriteToggleId, params: FavoriteCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.food_id))
    }

    /// A failed load leaves the flag off.
    async fn on_create(&mut self, ctx: &FavoriteContext, _mailbox: &Mailbox<Self>) -> Result<(), Self::Error> {
        match ctx.catalog.list_favorites().await {
            Ok(favorites) => self.load(&favorites),
            Err(e) => warn!(favorite = %self.id, food_id = %self.food_id, error = %e, "Favorite status load failed"),
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: FavoriteAction,
        ctx: &FavoriteContext,
        mailbox: &Mailbox<Self>,
    ) -> Result<FavoriteActionResult, Self::Error> {
        match action {
            FavoriteAction::Toggle(snapshot) => {
                if let Some(snapshot) = snapshot.as_ref().filter(|s| s.id != self.food_id) {
                    return Err(FavoriteError::WrongFood {
                        session: self.food_id,
                        snapshot: snapshot.id,
                    });
                }
                let (seq, change) = self
                    .toggle(snapshot)
                    .ok_or(FavoriteError::DetailMissing(self.food_id))?;
                let catalog = ctx.catalog.clone();
                let session = self.id;
                mailbox.defer(async move {
                    let result = match &change {
                        FavoriteChange::Add(favorite) => catalog.add_favorite(favorite).await,
                        FavoriteChange::Remove(food_id) => catalog.remove_favorite(*food_id).await,
                    };
                    if let Err(e) = &result {
                        warn!(favorite = %session, %seq, ?change, error = %e, "Favorite sync failed");
                    }
                    FavoriteAction::SyncResolved {
                        seq,
                        ok: result.is_ok(),
                    }
                });
                Ok(FavoriteActionResult::Toggle(self.is_favorite))
            }
            FavoriteAction::SyncResolved { seq, ok } => {
                let applied = self.resolve(seq, ok);
                if !applied {
                    debug!(favorite = %self.id, %seq, "Superseded favorite sync ignored");
                }
                Ok(FavoriteActionResult::SyncResolved(applied))
            }
            FavoriteAction::Reconcile => match ctx.catalog.list_favorites().await {
                Ok(favorites) => {
                    let drifted = self.reconcile(&favorites);
                    if drifted {
                        debug!(favorite = %self.id, is_favorite = self.is_favorite, "Favorite flag corrected");
                    }
                    Ok(FavoriteActionResult::Reconcile(drifted))
                }
                Err(e) => {
                    warn!(favorite = %self.id, error = %e, "Favorite reconcile failed");
                    Ok(FavoriteActionResult::Reconcile(false))
                }
            },
        }
    }
}
