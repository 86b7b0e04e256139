use crate::model::{CategoryId, FoodDetail, FoodId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of a food stored in the favorites collection, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRef {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: CategoryId,
    pub image_url: String,
    pub thumbnail_url: String,
}

impl From<&FoodDetail> for FavoriteRef {
    fn from(detail: &FoodDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name.clone(),
            description: detail.description.clone(),
            price: detail.price,
            category: detail.category,
            image_url: detail.image_url.clone(),
            thumbnail_url: detail.thumbnail_url.clone(),
        }
    }
}
