//! # Session Mailbox
//!
//! A [`Mailbox`] lets a session schedule work without blocking its actor. The scheduled
//! future runs on its own Tokio task; its output is posted back to the same session as a
//! [`ResourceRequest::Deferred`] action.
//!
//! The mailbox only holds a weak sender. Pending work never keeps an actor alive: once
//! every client is dropped the actor shuts down and late outputs are discarded.

use crate::framework::{ActorEntity, ResourceRequest};
use std::future::Future;
use tokio::sync::mpsc;
use tracing::debug;

/// Handle a session uses to post deferred actions to itself.
pub struct Mailbox<T: ActorEntity> {
    id: T::Id,
    loopback: mpsc::WeakSender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Mailbox<T> {
    pub(crate) fn new(id: T::Id, loopback: mpsc::WeakSender<ResourceRequest<T>>) -> Self {
        Self { id, loopback }
    }

    /// The session this mailbox delivers to.
    pub fn id(&self) -> &T::Id {
        &self.id
    }

    /// Runs `work` in the background and delivers its output to this session.
    ///
    /// Delivery is skipped if the actor has shut down. If the session was deleted in the
    /// meantime, the actor drops the action on arrival.
    pub fn defer<F>(&self, work: F)
    where
        F: Future<Output = T::Action> + Send + 'static,
    {
        let id = self.id.clone();
        let loopback = self.loopback.clone();
        tokio::spawn(async move {
            let action = work.await;
            match loopback.upgrade() {
                Some(sender) => {
                    if sender
                        .send(ResourceRequest::Deferred { id, action })
                        .await
                        .is_err()
                    {
                        debug!("Deferred action lost, actor closed");
                    }
                }
                None => debug!(%id, "Deferred action dropped, actor gone"),
            }
        });
    }
}
