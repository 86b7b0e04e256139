//! Error types for the browser actor.

use thiserror::Error;

/// Browser fetch failures are silent, so only plumbing errors reach callers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BrowserError {
    #[error("Browser session not found: {0}")]
    SessionNotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BrowserError {
    fn from(msg: String) -> Self {
        BrowserError::ActorCommunicationError(msg)
    }
}
