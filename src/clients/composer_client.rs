//! # Composer Client
//!
//! Intents for the food detail screen. Each method unwraps the matching
//! [`ComposerActionResult`] variant.

use crate::composer_actor::{ComposerAction, ComposerActionResult, ComposerCreate, ComposerError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{ComposerId, ExtraId, FoodId, OrderComposer, OrderId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::oneshot;
use tracing::{debug, instrument};

/// Client for interacting with the composer actor.
#[derive(Clone)]
pub struct ComposerClient {
    inner: ResourceClient<OrderComposer>,
}

impl ComposerClient {
    pub fn new(inner: ResourceClient<OrderComposer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<OrderComposer> for ComposerClient {
    type Error = ComposerError;

    fn inner(&self) -> &ResourceClient<OrderComposer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ComposerError::SessionNotFound(id),
            other => other
                .into_entity_error::<ComposerError>()
                .unwrap_or_else(|e| ComposerError::ActorCommunicationError(e.to_string())),
        }
    }
}

fn unexpected(result: ComposerActionResult) -> ComposerError {
    ComposerError::ActorCommunicationError(format!("unexpected result {:?}", result))
}

impl ComposerClient {
    /// Enters the detail screen of `food_id`. Returns after the detail load was attempted.
    #[instrument(skip(self))]
    pub async fn open(&self, food_id: FoodId) -> Result<ComposerId, ComposerError> {
        debug!("Sending request");
        self.inner
            .create(ComposerCreate { food_id })
            .await
            .map_err(Self::map_error)
    }

    async fn send(&self, id: ComposerId, action: ComposerAction) -> Result<ComposerActionResult, ComposerError> {
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }

    /// Returns whether the detail loaded.
    #[instrument(skip(self))]
    pub async fn reload(&self, id: ComposerId) -> Result<bool, ComposerError> {
        match self.send(id, ComposerAction::Reload).await? {
            ComposerActionResult::Reload(loaded) => Ok(loaded),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn increment_extra(&self, id: ComposerId, extra: ExtraId) -> Result<Option<u32>, ComposerError> {
        match self.send(id, ComposerAction::IncrementExtra(extra)).await? {
            ComposerActionResult::IncrementExtra(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn decrement_extra(&self, id: ComposerId, extra: ExtraId) -> Result<Option<u32>, ComposerError> {
        match self.send(id, ComposerAction::DecrementExtra(extra)).await? {
            ComposerActionResult::DecrementExtra(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn increment_food(&self, id: ComposerId) -> Result<u32, ComposerError> {
        match self.send(id, ComposerAction::IncrementFood).await? {
            ComposerActionResult::IncrementFood(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn decrement_food(&self, id: ComposerId) -> Result<u32, ComposerError> {
        match self.send(id, ComposerAction::DecrementFood).await? {
            ComposerActionResult::DecrementFood(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn total(&self, id: ComposerId) -> Result<Decimal, ComposerError> {
        match self.send(id, ComposerAction::Total).await? {
            ComposerActionResult::Total(total) => Ok(total),
            other => Err(unexpected(other)),
        }
    }

    /// Places the order and waits for the Catalog Service. The session keeps serving
    /// other intents while the order is in flight. On error the user has already seen
    /// the order alert and the composer is unchanged.
    #[instrument(skip(self))]
    pub async fn submit(&self, id: ComposerId) -> Result<OrderId, ComposerError> {
        let (reply, outcome) = oneshot::channel();
        match self.send(id, ComposerAction::Submit { reply }).await? {
            ComposerActionResult::Submit(order_id) => debug!(%order_id, "Order accepted"),
            other => return Err(unexpected(other)),
        }
        let order_id = outcome.await.map_err(|_| {
            ComposerError::ActorCommunicationError("order outcome dropped".to_string())
        })??;
        Ok(order_id)
    }
}
