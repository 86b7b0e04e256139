//! Error types for the favorite actor.

use crate::model::FoodId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FavoriteError {
    /// A toggle carried a snapshot of another food.
    #[error("Snapshot of {snapshot} cannot toggle {session}")]
    WrongFood { session: FoodId, snapshot: FoodId },

    /// The food's detail is not loaded, so there is nothing to store as a favorite.
    #[error("No detail loaded for {0}")]
    DetailMissing(FoodId),

    #[error("Favorite session not found: {0}")]
    SessionNotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for FavoriteError {
    fn from(msg: String) -> Self {
        FavoriteError::ActorCommunicationError(msg)
    }
}
