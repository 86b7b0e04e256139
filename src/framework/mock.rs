//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then helpers like
//! [`expect_create`] or [`expect_action`] to assert what the client sent and answer it.
//! [`MockClient`] offers the same thing as a fluent, queue-based API.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response the mock answers it with.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push_back(expectation);
}

/// A mock client that answers requests from a queue of expectations, in order.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<OrderComposer>::new();
/// mock.expect_create().return_ok(ComposerId(1));
/// mock.expect_action(ComposerId(1)).return_ok(ComposerOutcome::Quantity(Some(2)));
///
/// let client = ComposerClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
///
/// A request that does not match the next expectation panics the mock's task, which
/// surfaces in the test as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                // Release the lock before answering
                let expectation = queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "get for unexpected session");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: expected, response })) => {
                        assert_eq!(id, expected, "delete for unexpected session");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { id, respond_to, .. }, Some(Expectation::Action { id: expected, response })) => {
                        assert_eq!(id, expected, "action for unexpected session");
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        push(&self.expectations, Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Create { response: Err(error) });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        push(
            &self.expectations,
            Expectation::Get {
                id: self.id,
                response: Ok(value),
            },
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Get {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        push(
            &self.expectations,
            Expectation::Delete {
                id: self.id,
                response: Ok(()),
            },
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Delete {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        push(
            &self.expectations,
            Expectation::Action {
                id: self.id,
                response: Ok(result),
            },
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Action {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client wired to a receiver the test controls.
///
/// # Testing Strategy
/// When only the *client* logic is under test (e.g. `ComposerClient` mapping results),
/// there is no need to spin up a `ResourceActor`. The test reads what arrives on
/// `receiver`, asserts on it, and answers through the `respond_to` channel, which makes
/// success, failure and delays fully deterministic.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request.
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Mailbox;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    #[derive(Debug, PartialEq)]
    enum NoteAction {
        Shout,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    struct NoteError;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u32;
        type Create = NoteCreate;
        type Action = NoteAction;
        type ActionResult = String;
        type Context = ();
        type Error = NoteError;

        fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                text: params.text,
            })
        }

        async fn handle_action(
            &mut self,
            _action: NoteAction,
            _ctx: &(),
            _mailbox: &Mailbox<Self>,
        ) -> Result<String, Self::Error> {
            Ok(self.text.to_uppercase())
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(NoteCreate {
                    text: "extra bacon".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.text, "extra bacon");
        responder.send(Ok(7)).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), 7);
    }

    #[tokio::test]
    async fn test_receiver_helpers_cover_action_and_delete() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let task = tokio::spawn(async move {
            let shouted = client.perform_action(3, NoteAction::Shout).await;
            let closed = client.delete(3).await;
            (shouted, closed)
        });

        let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!((id, action), (3, NoteAction::Shout));
        responder.send(Ok("HI".to_string())).unwrap();

        let (id, responder) = expect_delete(&mut receiver).await.unwrap();
        assert_eq!(id, 3);
        responder.send(Err(FrameworkError::NotFound("3".into()))).unwrap();

        let (shouted, closed) = task.await.unwrap();
        assert_eq!(shouted.unwrap(), "HI");
        assert!(matches!(closed, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Note {
            id: 1,
            text: "no onions".into(),
        }));
        mock.expect_delete(1).return_ok();

        let client = mock.client();
        let id = client
            .create(NoteCreate {
                text: "no onions".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap().unwrap();
        assert_eq!(fetched.text, "no onions");
        client.delete(1).await.unwrap();

        mock.verify();
    }
}
