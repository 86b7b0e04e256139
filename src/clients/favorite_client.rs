//! # Favorite Client
//!
//! Intents for the favorite toggle of the food detail screen.

use crate::favorite_actor::{FavoriteAction, FavoriteActionResult, FavoriteCreate, FavoriteError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{FavoriteRef, FavoriteToggle, FavoriteToggleId, FoodId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the favorite actor.
#[derive(Clone)]
pub struct FavoriteClient {
    inner: ResourceClient<FavoriteToggle>,
}

impl FavoriteClient {
    pub fn new(inner: ResourceClient<FavoriteToggle>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<FavoriteToggle> for FavoriteClient {
    type Error = FavoriteError;

    fn inner(&self) -> &ResourceClient<FavoriteToggle> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => FavoriteError::SessionNotFound(id),
            other => other
                .into_entity_error::<FavoriteError>()
                .unwrap_or_else(|e| FavoriteError::ActorCommunicationError(e.to_string())),
        }
    }
}

fn unexpected(result: FavoriteActionResult) -> FavoriteError {
    FavoriteError::ActorCommunicationError(format!("unexpected result {:?}", result))
}

impl FavoriteClient {
    /// Opens a favorite session on `food_id`, with the membership already loaded.
    #[instrument(skip(self))]
    pub async fn open(&self, food_id: FoodId) -> Result<FavoriteToggleId, FavoriteError> {
        debug!("Sending request");
        self.inner
            .create(FavoriteCreate { food_id })
            .await
            .map_err(Self::map_error)
    }

    /// Flips the flag and returns its new value without waiting for the network.
    ///
    /// `snapshot` is only needed to add a favorite. Adding without one fails with
    /// [`FavoriteError::DetailMissing`].
    #[instrument(skip(self, snapshot), fields(has_snapshot = snapshot.is_some()))]
    pub async fn toggle(
        &self,
        id: FavoriteToggleId,
        snapshot: Option<FavoriteRef>,
    ) -> Result<bool, FavoriteError> {
        match self
            .inner
            .perform_action(id, FavoriteAction::Toggle(snapshot))
            .await
            .map_err(Self::map_error)?
        {
            FavoriteActionResult::Toggle(is_favorite) => Ok(is_favorite),
            other => Err(unexpected(other)),
        }
    }

    /// Returns whether the local flag had drifted from the server.
    #[instrument(skip(self))]
    pub async fn reconcile(&self, id: FavoriteToggleId) -> Result<bool, FavoriteError> {
        match self
            .inner
            .perform_action(id, FavoriteAction::Reconcile)
            .await
            .map_err(Self::map_error)?
        {
            FavoriteActionResult::Reconcile(drifted) => Ok(drifted),
            other => Err(unexpected(other)),
        }
    }
}
