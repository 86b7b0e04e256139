//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, which owns every open session of one kind
//! and processes their requests sequentially.

use crate::framework::{ActorEntity, FrameworkError, Mailbox, ResourceClient, ResourceRequest};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages the open sessions of one entity type.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the sessions (`store`) and the
/// receiver end of the channel. Requests are handled one at a time, so session state
/// needs no `Mutex`: a browser session can never observe two intents interleaved.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the `actor` (server) and `client`.
/// 2.  **Wire**: pass collaborators into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<OrderComposer>::new(32);
/// tokio::spawn(actor.run(ComposerContext::new(catalog, submitter)));
/// let id = client.create(ComposerCreate { food_id: FoodId(1) }).await?;
/// ```
///
/// # Deferred Actions
///
/// The actor keeps a weak sender to its own channel and hands sessions a [`Mailbox`]
/// built on it. Deferred outputs arrive as [`ResourceRequest::Deferred`]; one addressed
/// to a session that has since been deleted is dropped.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    loopback: mpsc::WeakSender<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client calls
    /// and deferred deliveries wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            loopback: sender.downgrade(),
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every hook, so collaborators can be created after the actor
    /// and wired in here.
    pub async fn run(mut self, context: T::Context) {
        // "OrderComposer" instead of "food_catalog::model::composer::OrderComposer"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            let mailbox = Mailbox::new(id.clone(), self.loopback.clone());
                            if let Err(e) = item.on_create(&context, &mailbox).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, open = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, open = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let mailbox = Mailbox::new(id.clone(), self.loopback.clone());
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context, &mailbox)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Deferred { id, action } => {
                    debug!(entity_type, %id, ?action, "Deferred");
                    let mailbox = Mailbox::new(id.clone(), self.loopback.clone());
                    match self.store.get_mut(&id) {
                        Some(item) => {
                            if let Err(e) = item.handle_action(action, &context, &mailbox).await {
                                warn!(entity_type, %id, error = %e, "Deferred action failed");
                            }
                        }
                        None => debug!(entity_type, %id, "Deferred action dropped, session closed"),
                    }
                }
            }
        }

        info!(entity_type, open = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    // --- Test Entity: a counter that can also bump itself later ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: u32,
        label: String,
        count: u32,
    }

    #[derive(Debug)]
    struct TallyCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TallyAction {
        Bump,
        BumpLater,
        Fail,
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("tally refused")]
    struct TallyError;

    #[async_trait]
    impl ActorEntity for Tally {
        type Id = u32;
        type Create = TallyCreate;
        type Action = TallyAction;
        type ActionResult = u32;
        type Context = ();
        type Error = TallyError;

        fn from_create_params(id: u32, params: TallyCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
                count: 0,
            })
        }

        async fn handle_action(
            &mut self,
            action: TallyAction,
            _ctx: &(),
            mailbox: &Mailbox<Self>,
        ) -> Result<u32, Self::Error> {
            match action {
                TallyAction::Bump => {
                    self.count += 1;
                    Ok(self.count)
                }
                TallyAction::BumpLater => {
                    mailbox.defer(async { TallyAction::Bump });
                    Ok(self.count)
                }
                TallyAction::Fail => Err(TallyError),
            }
        }
    }

    async fn count_eventually(client: &ResourceClient<Tally>, id: u32, expected: u32) {
        for _ in 0..200 {
            let tally = client.get(id).await.unwrap().unwrap();
            if tally.count == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("count never reached {}", expected);
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        let handle = tokio::spawn(actor.run(()));

        let id = client
            .create(TallyCreate {
                label: "extras".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        assert_eq!(client.perform_action(id, TallyAction::Bump).await.unwrap(), 1);
        let tally = client.get(id).await.unwrap().unwrap();
        assert_eq!(tally.label, "extras");
        assert_eq!(tally.count, 1);

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
        assert!(matches!(
            client.delete(id).await,
            Err(FrameworkError::NotFound(_))
        ));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_entity_error_is_recoverable() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(TallyCreate { label: "x".into() }).await.unwrap();
        let err = client
            .perform_action(id, TallyAction::Fail)
            .await
            .unwrap_err();
        assert_eq!(err.into_entity_error::<TallyError>().unwrap(), TallyError);
    }

    #[tokio::test]
    async fn test_deferred_action_reaches_session() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(TallyCreate { label: "x".into() }).await.unwrap();
        let immediate = client
            .perform_action(id, TallyAction::BumpLater)
            .await
            .unwrap();
        assert_eq!(immediate, 0);

        count_eventually(&client, id, 1).await;
    }

    #[tokio::test]
    async fn test_deferred_work_does_not_keep_actor_alive() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        let handle = tokio::spawn(actor.run(()));

        let id = client.create(TallyCreate { label: "x".into() }).await.unwrap();
        client
            .perform_action(id, TallyAction::BumpLater)
            .await
            .unwrap();

        drop(client);
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("actor should stop once clients are gone")
            .unwrap();
    }
}
