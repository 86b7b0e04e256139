//! # Catalog Service
//!
//! The remote collaborator every session talks to: categories, foods, favorites and
//! orders. [`CatalogService`] has one method per endpoint of the HTTP contract:
//!
//! ```text
//! GET    /categories                  -> Category[]
//! GET    /foods?category_like=<id>    -> FoodSummary[]   (no id = unfiltered)
//! GET    /foods?name=<term>           -> FoodSummary[]
//! GET    /foods/{id}?extras           -> FoodDetail
//! GET    /favorites                   -> FavoriteRef[]
//! POST   /favorites     body=FavoriteRef
//! DELETE /favorites/{id}
//! POST   /orders        body=Order
//! ```
//!
//! [`HttpCatalogService`] talks to a real backend; [`InMemoryCatalog`] serves a fixed
//! menu in-process and can be told to fail.

pub mod error;
pub mod http;
pub mod memory;

pub use error::CatalogError;
pub use http::HttpCatalogService;
pub use memory::{Endpoint, InMemoryCatalog};

use crate::model::{Category, CategoryId, FavoriteRef, FoodDetail, FoodId, FoodSummary, Order};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// All foods, or only those of `category`.
    async fn list_foods(&self, category: Option<CategoryId>) -> Result<Vec<FoodSummary>, CatalogError>;

    /// Foods matching `name`. The matching rule belongs to the backend.
    async fn search_foods(&self, name: &str) -> Result<Vec<FoodSummary>, CatalogError>;

    async fn food_detail(&self, id: FoodId) -> Result<FoodDetail, CatalogError>;

    async fn list_favorites(&self) -> Result<Vec<FavoriteRef>, CatalogError>;

    async fn add_favorite(&self, favorite: &FavoriteRef) -> Result<(), CatalogError>;

    async fn remove_favorite(&self, id: FoodId) -> Result<(), CatalogError>;

    async fn create_order(&self, order: &Order) -> Result<(), CatalogError>;
}

/// The form sessions hold the service in.
pub type SharedCatalog = Arc<dyn CatalogService>;
