//! # Order Submitter
//!
//! Posts a composed order. Success moves the user to the orders list; any failure raises
//! the one fixed order alert and leaves the composer untouched so the user can retry.

pub mod error;

pub use error::SubmitError;

use crate::catalog::SharedCatalog;
use crate::model::{FoodId, Order};
use crate::ui::{SharedAlerts, SharedNavigator, ORDER_FAILED_ALERT};
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct OrderSubmitter {
    catalog: SharedCatalog,
    navigator: SharedNavigator,
    alerts: SharedAlerts,
}

impl OrderSubmitter {
    pub fn new(catalog: SharedCatalog, navigator: SharedNavigator, alerts: SharedAlerts) -> Self {
        Self {
            catalog,
            navigator,
            alerts,
        }
    }

    #[instrument(skip(self, order), fields(order_id = %order.id, product_id = %order.product_id))]
    pub async fn submit(&self, order: &Order) -> Result<(), SubmitError> {
        match self.catalog.create_order(order).await {
            Ok(()) => {
                info!(total = %order.price, quantity = order.quantity, "Order placed");
                self.navigator.navigate_to_orders();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Order rejected");
                Err(self.surface(SubmitError::Rejected(e)))
            }
        }
    }

    /// Raises the order alert for a composer whose detail never loaded. Nothing is sent.
    pub fn reject_without_detail(&self, food_id: FoodId) -> SubmitError {
        warn!(%food_id, "Submit without food detail");
        self.surface(SubmitError::DetailMissing(food_id))
    }

    fn surface(&self, error: SubmitError) -> SubmitError {
        self.alerts.alert(ORDER_FAILED_ALERT);
        error
    }
}
