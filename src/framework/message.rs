//! # Generic Messages
//!
//! The message types exchanged between a `ResourceClient` (or a session's `Mailbox`) and
//! its `ResourceActor`.

use crate::framework::{ActorEntity, FrameworkError};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a `ResourceActor`.
///
/// The variants follow a session lifecycle rather than plain CRUD:
///
/// - **Create**: a screen is entered. Uses [`ActorEntity::Create`] to open a session.
/// - **Get**: a screen renders. Returns a snapshot of the session.
/// - **Delete**: a screen is left. Discards the session.
/// - **Action**: a user intent, answered through `respond_to`.
/// - **Deferred**: the output of work a session scheduled through its
///   [`Mailbox`](crate::framework::Mailbox). Nobody waits for its result.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Deferred {
        id: T::Id,
        action: T::Action,
    },
}
