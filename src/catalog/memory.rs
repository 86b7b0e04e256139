//! # In-memory Catalog Service
//!
//! Serves a fixed menu from process memory. Categories filter by equality, name search
//! is a case-insensitive substring match, favorites are a set keyed by food id. Any
//! endpoint can be switched to failing with [`InMemoryCatalog::fail`], which is how the
//! integration tests drive the silent-failure and alert paths.

use crate::catalog::{CatalogError, CatalogService};
use crate::model::{
    Category, CategoryId, Extra, FavoriteRef, FoodDetail, FoodId, FoodSummary, Order,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// One row of the Catalog Service contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Categories,
    Foods,
    Search,
    FoodDetail,
    Favorites,
    AddFavorite,
    RemoveFavorite,
    CreateOrder,
}

#[derive(Debug, Default)]
struct Store {
    categories: Vec<Category>,
    foods: Vec<FoodDetail>,
    favorites: Vec<FavoriteRef>,
    orders: Vec<Order>,
    failing: HashSet<Endpoint>,
    calls: HashMap<Endpoint, usize>,
}

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    store: Mutex<Store>,
}

impl InMemoryCatalog {
    pub fn new(categories: Vec<Category>, foods: Vec<FoodDetail>) -> Self {
        Self {
            store: Mutex::new(Store {
                categories,
                foods,
                ..Store::default()
            }),
        }
    }

    /// A small menu: three categories, a handful of foods, some with extras.
    pub fn sample() -> Self {
        let categories = vec![
            Category::new(1, "Pasta", "https://storage.example.com/categories/pasta.png"),
            Category::new(2, "Pizza", "https://storage.example.com/categories/pizza.png"),
            Category::new(3, "Desserts", "https://storage.example.com/categories/desserts.png"),
        ];
        let foods = vec![
            sample_food(1, "Creamy Pasta", "Fettuccine in a white wine cream sauce", Decimal::new(1990, 2), 1, vec![
                Extra::new(1, "Bacon", Decimal::new(150, 2)),
                Extra::new(2, "Grilled chicken", Decimal::new(300, 2)),
            ]),
            sample_food(2, "Veggie Lasagna", "Layers of pasta, spinach and ricotta", Decimal::new(2190, 2), 1, vec![
                Extra::new(3, "Extra cheese", Decimal::new(200, 2)),
            ]),
            sample_food(3, "Pizza", "Tomato, mozzarella and basil", Decimal::new(3000, 2), 2, vec![
                Extra::new(4, "Olives", Decimal::new(500, 2)),
                Extra::new(5, "Oregano", Decimal::new(300, 2)),
            ]),
            sample_food(4, "Pizza Pepperoni", "Spicy pepperoni and mozzarella", Decimal::new(3400, 2), 2, vec![]),
            sample_food(5, "Chocolate Cake", "Dark chocolate with a molten center", Decimal::new(1200, 2), 3, vec![
                Extra::new(6, "Ice cream scoop", Decimal::new(400, 2)),
            ]),
        ];
        Self::new(categories, foods)
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Makes every following call to `endpoint` fail until [`InMemoryCatalog::recover`].
    pub fn fail(&self, endpoint: Endpoint) {
        self.lock().failing.insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.lock().failing.remove(&endpoint);
    }

    /// Number of calls made to `endpoint`, failed ones included.
    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.lock().calls.get(&endpoint).copied().unwrap_or(0)
    }

    pub fn favorites(&self) -> Vec<FavoriteRef> {
        self.lock().favorites.clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.lock().orders.clone()
    }

    /// Counts the call and locks the store, or fails if `endpoint` is set to fail.
    fn enter(&self, endpoint: Endpoint) -> Result<MutexGuard<'_, Store>, CatalogError> {
        let mut store = self.lock();
        *store.calls.entry(endpoint).or_default() += 1;
        if store.failing.contains(&endpoint) {
            debug!(?endpoint, "Injected failure");
            return Err(CatalogError::Unavailable(format!("{:?} is failing", endpoint)));
        }
        Ok(store)
    }
}

fn sample_food(
    id: u32,
    name: &str,
    description: &str,
    price: Decimal,
    category: u32,
    extras: Vec<Extra>,
) -> FoodDetail {
    FoodDetail {
        id: FoodId(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: CategoryId(category),
        image_url: format!("https://storage.example.com/foods/{}.png", id),
        thumbnail_url: format!("https://storage.example.com/foods/{}-thumb.png", id),
        extras,
    }
}

fn status(endpoint: &str, status: u16) -> CatalogError {
    CatalogError::Status {
        endpoint: endpoint.to_string(),
        status,
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.enter(Endpoint::Categories)?.categories.clone())
    }

    async fn list_foods(&self, category: Option<CategoryId>) -> Result<Vec<FoodSummary>, CatalogError> {
        let store = self.enter(Endpoint::Foods)?;
        Ok(store
            .foods
            .iter()
            .filter(|food| category.map_or(true, |category| food.category == category))
            .map(FoodSummary::from)
            .collect())
    }

    async fn search_foods(&self, name: &str) -> Result<Vec<FoodSummary>, CatalogError> {
        let store = self.enter(Endpoint::Search)?;
        let needle = name.to_lowercase();
        Ok(store
            .foods
            .iter()
            .filter(|food| food.name.to_lowercase().contains(&needle))
            .map(FoodSummary::from)
            .collect())
    }

    async fn food_detail(&self, id: FoodId) -> Result<FoodDetail, CatalogError> {
        let store = self.enter(Endpoint::FoodDetail)?;
        store
            .foods
            .iter()
            .find(|food| food.id == id)
            .cloned()
            .ok_or_else(|| status("GET /foods/{id}", 404))
    }

    async fn list_favorites(&self) -> Result<Vec<FavoriteRef>, CatalogError> {
        Ok(self.enter(Endpoint::Favorites)?.favorites.clone())
    }

    async fn add_favorite(&self, favorite: &FavoriteRef) -> Result<(), CatalogError> {
        let mut store = self.enter(Endpoint::AddFavorite)?;
        if store.favorites.iter().any(|existing| existing.id == favorite.id) {
            return Err(status("POST /favorites", 409));
        }
        store.favorites.push(favorite.clone());
        Ok(())
    }

    async fn remove_favorite(&self, id: FoodId) -> Result<(), CatalogError> {
        let mut store = self.enter(Endpoint::RemoveFavorite)?;
        let before = store.favorites.len();
        store.favorites.retain(|favorite| favorite.id != id);
        if store.favorites.len() == before {
            return Err(status("DELETE /favorites/{id}", 404));
        }
        Ok(())
    }

    async fn create_order(&self, order: &Order) -> Result<(), CatalogError> {
        self.enter(Endpoint::CreateOrder)?.orders.push(order.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn category_filter_is_equality() {
        let catalog = InMemoryCatalog::sample();
        let pizzas = catalog.list_foods(Some(CategoryId(2))).await.unwrap();
        assert_eq!(pizzas.len(), 2);
        assert!(pizzas.iter().all(|food| food.category_id == CategoryId(2)));
        assert_eq!(catalog.list_foods(None).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let catalog = InMemoryCatalog::sample();
        let names: Vec<_> = catalog
            .search_foods("pizza")
            .await
            .unwrap()
            .into_iter()
            .map(|food| food.name)
            .collect();
        assert_eq!(names, vec!["Pizza", "Pizza Pepperoni"]);
    }

    #[tokio::test]
    async fn favorites_are_a_set() {
        let catalog = InMemoryCatalog::sample();
        let detail = catalog.food_detail(FoodId(3)).await.unwrap();
        let favorite = FavoriteRef::from(&detail);

        catalog.add_favorite(&favorite).await.unwrap();
        let duplicate = catalog.add_favorite(&favorite).await.unwrap_err();
        assert_eq!(duplicate.status(), Some(409));
        assert_eq!(catalog.favorites().len(), 1);

        catalog.remove_favorite(FoodId(3)).await.unwrap();
        let missing = catalog.remove_favorite(FoodId(3)).await.unwrap_err();
        assert_eq!(missing.status(), Some(404));
    }

    #[tokio::test]
    async fn failing_endpoint_counts_calls_and_recovers() {
        let catalog = InMemoryCatalog::sample();
        catalog.fail(Endpoint::Categories);
        assert!(matches!(
            catalog.list_categories().await,
            Err(CatalogError::Unavailable(_))
        ));
        catalog.recover(Endpoint::Categories);
        assert_eq!(catalog.list_categories().await.unwrap().len(), 3);
        assert_eq!(catalog.calls(Endpoint::Categories), 2);
    }

    #[tokio::test]
    async fn unknown_food_is_not_found() {
        let catalog = InMemoryCatalog::sample();
        let err = catalog.food_detail(FoodId(42)).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
