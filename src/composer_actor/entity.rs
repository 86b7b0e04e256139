//! ActorEntity trait implementation for [`OrderComposer`].

use super::{ComposerAction, ComposerActionResult, ComposerCreate, ComposerError};
use crate::catalog::SharedCatalog;
use crate::framework::{ActorEntity, Mailbox};
use crate::model::{ComposerId, OrderComposer, OrderId};
use crate::submitter::OrderSubmitter;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Collaborators of composer sessions.
#[derive(Clone)]
pub struct ComposerContext {
    pub catalog: SharedCatalog,
    pub submitter: OrderSubmitter,
}

impl ComposerContext {
    pub fn new(catalog: SharedCatalog, submitter: OrderSubmitter) -> Self {
        Self { catalog, submitter }
    }
}

impl OrderComposer {
    /// Fetches the detail. A failure is logged and leaves the session as it was.
    async fn fetch_detail(&mut self, ctx: &ComposerContext) -> bool {
        match ctx.catalog.food_detail(self.food_id).await {
            Ok(detail) => {
                debug!(composer = %self.id, food_id = %self.food_id, extras = detail.extras.len(), "Detail loaded");
                self.load(detail);
                true
            }
            Err(e) => {
                warn!(composer = %self.id, food_id = %self.food_id, error = %e, "Detail load failed");
                false
            }
        }
    }
}

#[async_trait]
impl ActorEntity for OrderComposer {
    type Id = ComposerId;
    type Create = ComposerCreate;
    type Action = ComposerAction;
    type ActionResult = ComposerActionResult;
    type Context = ComposerContext;
    type Error = ComposerError;

    fn from_create_params(id: ComposerId, params: ComposerCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.food_id))
    }

    /// Loads the detail before the session is stored, so the first snapshot is complete.
    /// The session opens even if the load fails.
    async fn on_create(&mut self, ctx: &ComposerContext, _mailbox: &Mailbox<Self>) -> Result<(), Self::Error> {
        self.fetch_detail(ctx).await;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ComposerAction,
        ctx: &ComposerContext,
        mailbox: &Mailbox<Self>,
    ) -> Result<ComposerActionResult, Self::Error> {
        match action {
            ComposerAction::Reload => Ok(ComposerActionResult::Reload(self.fetch_detail(ctx).await)),
            ComposerAction::IncrementExtra(extra_id) => {
                Ok(ComposerActionResult::IncrementExtra(self.increment_extra(extra_id)))
            }
            ComposerAction::DecrementExtra(extra_id) => {
                Ok(ComposerActionResult::DecrementExtra(self.decrement_extra(extra_id)))
            }
            ComposerAction::IncrementFood => Ok(ComposerActionResult::IncrementFood(self.increment_food())),
            ComposerAction::DecrementFood => Ok(ComposerActionResult::DecrementFood(self.decrement_food())),
            ComposerAction::Total => Ok(ComposerActionResult::Total(self.total())),
            ComposerAction::Submit { reply } => match self.build_order(OrderId::new_v4()) {
                Some(order) => {
                    let order_id = order.id;
                    let submitter = ctx.submitter.clone();
                    mailbox.defer(async move {
                        let outcome = submitter.submit(&order).await.map(|()| order_id);
                        let placed = outcome.is_ok();
                        if reply.send(outcome).is_err() {
                            debug!(%order_id, "Order outcome unclaimed");
                        }
                        ComposerAction::OrderSettled { order_id, placed }
                    });
                    Ok(ComposerActionResult::Submit(order_id))
                }
                None => Err(ctx.submitter.reject_without_detail(self.food_id).into()),
            },
            ComposerAction::OrderSettled { order_id, placed } => {
                debug!(composer = %self.id, %order_id, placed, "Order settled");
                Ok(ComposerActionResult::OrderSettled)
            }
        }
    }
}
