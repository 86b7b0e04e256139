//! # Food Screen
//!
//! The food detail screen owns two sessions: an order composer and a favorite toggle
//! on the same food. The favorite toggle stores a snapshot of the food detail, which
//! only the composer holds, so toggling goes through here.

use crate::clients::{ComposerClient, FavoriteClient};
use crate::composer_actor::ComposerError;
use crate::favorite_actor::FavoriteError;
use crate::framework::ActorClient;
use crate::model::{
    ComposerId, FavoriteRef, FavoriteToggle, FavoriteToggleId, FoodId, OrderComposer,
};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error(transparent)]
    Composer(#[from] ComposerError),

    #[error(transparent)]
    Favorite(#[from] FavoriteError),
}

/// Handles of the sessions behind one open food detail screen.
pub struct FoodScreen {
    pub food_id: FoodId,
    pub composer: ComposerId,
    pub favorite: FavoriteToggleId,
    composer_client: ComposerClient,
    favorite_client: FavoriteClient,
}

impl FoodScreen {
    pub(crate) fn new(
        food_id: FoodId,
        composer: ComposerId,
        favorite: FavoriteToggleId,
        composer_client: ComposerClient,
        favorite_client: FavoriteClient,
    ) -> Self {
        Self {
            food_id,
            composer,
            favorite,
            composer_client,
            favorite_client,
        }
    }

    pub async fn composer_state(&self) -> Result<OrderComposer, ScreenError> {
        self.composer_client
            .get(self.composer)
            .await?
            .ok_or_else(|| ComposerError::SessionNotFound(self.composer.to_string()).into())
    }

    pub async fn favorite_state(&self) -> Result<FavoriteToggle, ScreenError> {
        self.favorite_client
            .get(self.favorite)
            .await?
            .ok_or_else(|| FavoriteError::SessionNotFound(self.favorite.to_string()).into())
    }

    /// Flips the favorite flag. The composer's current detail is the snapshot stored
    /// when adding; without a loaded detail only removing is possible.
    #[instrument(skip(self), fields(food_id = %self.food_id))]
    pub async fn toggle_favorite(&self) -> Result<bool, ScreenError> {
        let composer = self.composer_state().await?;
        let snapshot = composer.detail.as_ref().map(FavoriteRef::from);
        let is_favorite = self.favorite_client.toggle(self.favorite, snapshot).await?;
        Ok(is_favorite)
    }

    /// Leaves the screen: closes both sessions.
    #[instrument(skip(self), fields(food_id = %self.food_id))]
    pub async fn close(self) -> Result<(), ScreenError> {
        let (composer, favorite) = tokio::join!(
            self.composer_client.delete(self.composer),
            self.favorite_client.delete(self.favorite)
        );
        composer?;
        favorite?;
        Ok(())
    }
}
