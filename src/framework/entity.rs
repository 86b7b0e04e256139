//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every screen session (catalog browser, order
//! composer, favorite toggle) implements to be hosted by the generic [`ResourceActor`].
//! It names the session's id, the payload that opens it, the intents it understands and
//! the dependencies it needs, and provides the lifecycle hooks the actor calls.
//!
//! # Session Lifecycle
//! - **Create**: the screen is entered. [`ActorEntity::from_create_params`] builds the
//!   session, then [`ActorEntity::on_create`] runs its initial loads.
//! - **Get**: the screen renders. The actor returns a clone of the session.
//! - **Action**: the user does something. [`ActorEntity::handle_action`] mutates the session.
//! - **Delete**: the screen is left. [`ActorEntity::on_delete`] runs, then the session is dropped.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to doing nothing.
//!
//! [`ResourceActor`]: crate::framework::ResourceActor

use crate::framework::Mailbox;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any session type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await Catalog Service calls. The `Context`
/// associated type is injected into every hook when the actor is started with `run()`,
/// which lets the orchestrator wire collaborators in after the actor was constructed.
///
/// # Deferred Work
/// `on_create` and `handle_action` receive a [`Mailbox`] bound to the session. Work that
/// must not block the actor (a query whose response may arrive late) is handed to
/// [`Mailbox::defer`]; its output comes back through `handle_action` as a regular action.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Session identifier. Generated by the actor from a `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32> + 'static;

    /// The payload that opens a session.
    type Create: Send + Sync + Debug;

    /// Intents and deferred responses understood by the session.
    type Action: Send + Sync + Debug + 'static;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Collaborators injected into the actor. Use `()` if none are needed.
    type Context: Send + Sync;

    /// The error type for this session.
    ///
    /// One enum per actor rather than one per action: clients match a single
    /// `ComposerError`, at the cost of every action nominally being able to return
    /// every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the session from its id and opening payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the session is constructed and before it is stored.
    /// Returning an error aborts the creation.
    async fn on_create(
        &mut self,
        _ctx: &Self::Context,
        _mailbox: &Mailbox<Self>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the session is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle one intent or deferred response.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
        mailbox: &Mailbox<Self>,
    ) -> Result<Self::ActionResult, Self::Error>;
}
