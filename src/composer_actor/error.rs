//! Error types for the composer actor.

use crate::submitter::SubmitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposerError {
    /// The order was not placed. The user has already seen the order alert.
    #[error("Order not placed: {0}")]
    Submit(#[from] SubmitError),

    #[error("Composer session not found: {0}")]
    SessionNotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ComposerError {
    fn from(msg: String) -> Self {
        ComposerError::ActorCommunicationError(msg)
    }
}
