//! Food records as served by the Catalog Service.
//!
//! Prices and extra values are [`Decimal`] so totals are exact. The wire format names
//! a summary's category `category` and an extra's unit price `value`.

use crate::model::CategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Foods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub u32);

impl From<u32> for FoodId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "food_{}", self.0)
    }
}

/// Type-safe identifier for Extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraId(pub u32);

impl From<u32> for ExtraId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ExtraId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "extra_{}", self.0)
    }
}

/// A food as listed by the catalog browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSummary {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(rename = "category")]
    pub category_id: CategoryId,
    pub thumbnail_url: String,
}

/// An optional add-on for a food. `quantity` is the only field changed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub id: ExtraId,
    pub name: String,
    #[serde(rename = "value")]
    pub unit_value: Decimal,
    #[serde(default)]
    pub quantity: u32,
}

impl Extra {
    pub fn new(id: impl Into<ExtraId>, name: impl Into<String>, unit_value: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_value,
            quantity: 0,
        }
    }

    /// `unit_value * quantity`.
    pub fn subtotal(&self) -> Decimal {
        self.unit_value * Decimal::from(self.quantity)
    }
}

/// The full record of one food, including its extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDetail {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: CategoryId,
    pub image_url: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

impl From<&FoodDetail> for FoodSummary {
    fn from(detail: &FoodDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name.clone(),
            description: detail.description.clone(),
            price: detail.price,
            category_id: detail.category,
            thumbnail_url: detail.thumbnail_url.clone(),
        }
    }
}
