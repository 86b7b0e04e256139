//! Custom actions for [`OrderComposer`](crate::model::OrderComposer) sessions.
//!
//! Extra and quantity changes are local and synchronous. `Reload` awaits the Catalog
//! Service inside the actor; `Submit` posts the order in the background, so other
//! intents keep flowing while it is in flight.

use crate::model::{ExtraId, FoodId, OrderId};
use crate::submitter::SubmitError;
use rust_decimal::Decimal;
use tokio::sync::oneshot;

/// Receives the outcome of a submitted order.
pub type OrderReply = oneshot::Sender<Result<OrderId, SubmitError>>;

/// Payload for opening a composer session on a food.
#[derive(Debug, Clone)]
pub struct ComposerCreate {
    pub food_id: FoodId,
}

#[derive(Debug)]
pub enum ComposerAction {
    /// Fetches the detail again and resets extras and quantity.
    Reload,
    IncrementExtra(ExtraId),
    /// Floors at 0.
    DecrementExtra(ExtraId),
    IncrementFood,
    /// No-op at quantity 1.
    DecrementFood,
    /// The current total, computed on demand.
    Total,
    /// Builds the order snapshot and hands it to the submitter. The outcome goes to
    /// `reply` once the Catalog Service answered.
    Submit { reply: OrderReply },
    /// Deferred: the submitter finished with an order.
    OrderSettled { order_id: OrderId, placed: bool },
}

/// Results from ComposerActions - variants match 1:1 with ComposerAction
#[derive(Debug, Clone, PartialEq)]
pub enum ComposerActionResult {
    /// Whether the detail loaded.
    Reload(bool),
    /// The extra's new quantity, `None` for an unknown extra.
    IncrementExtra(Option<u32>),
    DecrementExtra(Option<u32>),
    IncrementFood(u32),
    DecrementFood(u32),
    Total(Decimal),
    /// The order was built and is being posted.
    Submit(OrderId),
    OrderSettled,
}
