//! # Order Composer State
//!
//! The state behind the food detail screen: the loaded detail, the local extras, the
//! food quantity. Extras and quantity change synchronously; the total is recomputed
//! on every call and never cached.

use crate::model::{Extra, ExtraId, FoodDetail, FoodId, Order, OrderId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for composer sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComposerId(pub u32);

impl From<u32> for ComposerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ComposerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "composer_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderComposer {
    pub id: ComposerId,
    pub food_id: FoodId,
    /// `None` until the detail loads, and after a failed load.
    pub detail: Option<FoodDetail>,
    pub extras: Vec<Extra>,
    /// Never below 1.
    pub quantity: u32,
}

impl OrderComposer {
    pub fn new(id: ComposerId, food_id: FoodId) -> Self {
        Self {
            id,
            food_id,
            detail: None,
            extras: Vec::new(),
            quantity: 1,
        }
    }

    /// Starts over from a freshly fetched detail.
    pub fn load(&mut self, detail: FoodDetail) {
        self.extras = detail.extras.clone();
        self.quantity = 1;
        self.detail = Some(detail);
    }

    /// Returns the extra's new quantity, `None` if there is no such extra.
    pub fn increment_extra(&mut self, id: ExtraId) -> Option<u32> {
        let extra = self.extras.iter_mut().find(|extra| extra.id == id)?;
        extra.quantity = extra.quantity.saturating_add(1);
        Some(extra.quantity)
    }

    /// Floors at 0. Returns the extra's new quantity, `None` if there is no such extra.
    pub fn decrement_extra(&mut self, id: ExtraId) -> Option<u32> {
        let extra = self.extras.iter_mut().find(|extra| extra.id == id)?;
        extra.quantity = extra.quantity.saturating_sub(1);
        Some(extra.quantity)
    }

    pub fn increment_food(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_add(1);
        self.quantity
    }

    /// No-op at 1.
    pub fn decrement_food(&mut self) -> u32 {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
        self.quantity
    }

    /// `price * quantity + Σ value * quantity` over all extras. The food part is 0 while
    /// no detail is loaded.
    pub fn total(&self) -> Decimal {
        let food = self
            .detail
            .as_ref()
            .map(|detail| detail.price * Decimal::from(self.quantity))
            .unwrap_or(Decimal::ZERO);
        let extras: Decimal = self.extras.iter().map(Extra::subtotal).sum();
        food + extras
    }

    /// Snapshot of the current composition, `None` without a loaded detail.
    pub fn build_order(&self, id: OrderId) -> Option<Order> {
        let detail = self.detail.as_ref()?;
        Some(Order {
            id,
            product_id: detail.id,
            name: detail.name.clone(),
            description: detail.description.clone(),
            price: self.total(),
            category: detail.category,
            quantity: self.quantity,
            thumbnail_url: detail.thumbnail_url.clone(),
            extras: self
                .extras
                .iter()
                .filter(|extra| extra.quantity > 0)
                .cloned()
                .collect(),
        })
    }
}
