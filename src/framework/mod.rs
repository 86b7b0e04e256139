//! Generic actor framework for screen sessions.
//!
//! This module provides the building blocks the catalog browser, order composer and
//! favorite toggle are hosted on: one actor per session kind, one session per open
//! screen, sequential processing of intents and deferred responses.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that session types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the sessions of one kind
//! - [`ResourceClient`] - Type-safe handle for talking to an actor
//! - [`Mailbox`] - Lets a session post deferred actions to itself
//! - [`ActorClient`] - Provided `get`/`delete` for session-specific clients
//! - [`FrameworkError`] - Plumbing errors, carrying boxed session errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod mailbox;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use mailbox::Mailbox;
pub use message::{ResourceRequest, Response};
