use crate::model::{CategoryId, Extra, FoodId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Orders, generated client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// The order snapshot posted to the Catalog Service.
///
/// `price` is the composed total, not the unit price, and `extras` only holds extras
/// with a positive quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product_id: FoodId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: CategoryId,
    pub quantity: u32,
    pub thumbnail_url: String,
    pub extras: Vec<Extra>,
}
