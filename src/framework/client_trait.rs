//! # ActorClient Trait
//!
//! Provides a common interface for session-specific clients, adding default `get` and
//! `delete` methods built on top of a generic `ResourceClient`.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for session-specific clients to inherit the snapshot and close operations.
///
/// Implementors only provide access to the inner client and an error mapping;
/// `get` (render a snapshot) and `delete` (leave the screen) come for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<OrderComposer> for ComposerClient {
///     type Error = ComposerError;
///
///     fn inner(&self) -> &ResourceClient<OrderComposer> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         match e {
///             FrameworkError::NotFound(id) => ComposerError::SessionNotFound(id),
///             other => other
///                 .into_entity_error::<ComposerError>()
///                 .unwrap_or_else(|e| ComposerError::ActorCommunicationError(e.to_string())),
///         }
///     }
/// }
///
/// let snapshot = composer_client.get(id).await?;
/// composer_client.delete(id).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The session-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the session-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Snapshot of a session for rendering.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Closes a session.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
