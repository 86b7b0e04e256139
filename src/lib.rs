//! # Food Catalog
//!
//! > **The client core of a food ordering app: browse a catalog, compose an order,
//! > keep favorites.**
//!
//! Each screen's state lives in a session hosted by a resource actor. The actors run
//! on Tokio, process one request at a time and talk to a Catalog Service over HTTP (or
//! in memory). Navigation and alerts are handed to the host application.
//!
//! ## Core Concepts
//!
//! ### Sessions as Resources
//! A screen maps onto the lifecycle of an actor-managed entity:
//! - **Create**: the screen is entered and its initial loads run
//! - **Get**: the screen renders a snapshot
//! - **Action**: the user does something
//! - **Delete**: the screen is left
//!
//! ### Deferred Actions
//! Catalog queries of the browser, favorite syncs and order posts do not block their
//! actor. The
//! session hands the call to its [`Mailbox`](framework::Mailbox); the response comes
//! back later as an ordinary action. Responses are tagged with sequence numbers, so a
//! late answer to an outdated query never overwrites a newer one.
//!
//! ### Two Kinds of Failure
//! Failed loads and favorite syncs are silent: logged, never shown, state left as it
//! was. A failed order raises exactly one alert and leaves the composer untouched for a
//! retry.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>`, its client, the mailbox and the test mocks.
//!
//! ### 2. The State ([`model`])
//! Catalog records and the pure state machines: [`CatalogBrowser`](model::CatalogBrowser),
//! [`OrderComposer`](model::OrderComposer), [`FavoriteToggle`](model::FavoriteToggle).
//!
//! ### 3. The Actors ([`browser_actor`], [`composer_actor`], [`favorite_actor`])
//! `ActorEntity` implementations, their actions and errors.
//!
//! ### 4. The Interface ([`clients`])
//! Typed clients with one method per intent.
//!
//! ### 5. The Outside World ([`catalog`], [`submitter`], [`ui`])
//! The Catalog Service contract and its implementations, order submission, navigation
//! and alerts.
//!
//! ### 6. The Orchestrator ([`lifecycle`], [`config`])
//! [`FoodSystem`](lifecycle::FoodSystem) wires everything together and shuts it down.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo against the built-in sample menu
//! FOOD_CATALOG__CATALOG__BACKEND=memory RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod browser_actor;
pub mod catalog;
pub mod clients;
pub mod composer_actor;
pub mod config;
pub mod favorite_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod submitter;
pub mod ui;
