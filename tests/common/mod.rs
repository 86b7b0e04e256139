//! Shared test scaffolding: a full system on the in-memory catalog, a catalog whose
//! calls can be held back, and a polling helper for deferred state.

#![allow(dead_code)]

use async_trait::async_trait;
use food_catalog::catalog::{CatalogError, CatalogService, InMemoryCatalog};
use food_catalog::lifecycle::{Collaborators, FoodSystem};
use food_catalog::model::{Category, CategoryId, FavoriteRef, FoodDetail, FoodId, FoodSummary, Order};
use food_catalog::ui::{RecordingAlerts, RecordingNavigator};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

/// Polls `check` until it yields a value. Panics after about two seconds.
pub async fn eventually<T, F, Fut>(what: &str, mut check: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    for _ in 0..200 {
        if let Some(value) = check().await {
            return value;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {}", what);
}

/// Gives deferred actions already in flight time to land.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

pub struct Harness {
    pub catalog: Arc<InMemoryCatalog>,
    pub navigator: Arc<RecordingNavigator>,
    pub alerts: Arc<RecordingAlerts>,
    pub system: FoodSystem,
}

pub fn harness() -> Harness {
    let catalog = Arc::new(InMemoryCatalog::sample());
    let navigator = Arc::new(RecordingNavigator::default());
    let alerts = Arc::new(RecordingAlerts::default());
    let system = FoodSystem::new(
        Collaborators {
            catalog: catalog.clone(),
            navigator: navigator.clone(),
            alerts: alerts.clone(),
        },
        16,
    );
    Harness {
        catalog,
        navigator,
        alerts,
        system,
    }
}

/// The sample catalog, except that calls with a gate wait until the test opens it.
///
/// Gate keys: `"foods:all"`, `"foods:<category id>"`, `"add_favorite"`, `"remove_favorite"`,
/// `"create_order"`.
#[derive(Default)]
pub struct GatedCatalog {
    pub inner: InMemoryCatalog,
    gates: Mutex<HashMap<String, Arc<Semaphore>>>,
    held: Mutex<HashMap<String, usize>>,
}

impl GatedCatalog {
    pub fn sample() -> Self {
        Self {
            inner: InMemoryCatalog::sample(),
            ..Self::default()
        }
    }

    /// Holds every following call under `key`.
    pub fn close(&self, key: &str) {
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_string(), Arc::new(Semaphore::new(0)));
    }

    /// Lets held calls under `key` through, and all later ones.
    pub fn open(&self, key: &str) {
        if let Some(gate) = self.gates.lock().unwrap().remove(key) {
            gate.add_permits(1024);
        }
    }

    /// Calls under `key` currently waiting at a closed gate.
    pub fn held(&self, key: &str) -> usize {
        self.held.lock().unwrap().get(key).copied().unwrap_or(0)
    }

    async fn pass(&self, key: &str) {
        let gate = self.gates.lock().unwrap().get(key).cloned();
        if let Some(gate) = gate {
            *self.held.lock().unwrap().entry(key.to_string()).or_default() += 1;
            gate.acquire().await.unwrap().forget();
            *self.held.lock().unwrap().entry(key.to_string()).or_default() -= 1;
        }
    }
}

#[async_trait]
impl CatalogService for GatedCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.inner.list_categories().await
    }

    async fn list_foods(&self, category: Option<CategoryId>) -> Result<Vec<FoodSummary>, CatalogError> {
        let key = match category {
            Some(category) => format!("foods:{}", category.0),
            None => "foods:all".to_string(),
        };
        self.pass(&key).await;
        self.inner.list_foods(category).await
    }

    async fn search_foods(&self, name: &str) -> Result<Vec<FoodSummary>, CatalogError> {
        self.inner.search_foods(name).await
    }

    async fn food_detail(&self, id: FoodId) -> Result<FoodDetail, CatalogError> {
        self.inner.food_detail(id).await
    }

    async fn list_favorites(&self) -> Result<Vec<FavoriteRef>, CatalogError> {
        self.inner.list_favorites().await
    }

    async fn add_favorite(&self, favorite: &FavoriteRef) -> Result<(), CatalogError> {
        self.pass("add_favorite").await;
        self.inner.add_favorite(favorite).await
    }

    async fn remove_favorite(&self, id: FoodId) -> Result<(), CatalogError> {
        self.pass("remove_favorite").await;
        self.inner.remove_favorite(id).await
    }

    async fn create_order(&self, order: &Order) -> Result<(), CatalogError> {
        self.pass("create_order").await;
        self.inner.create_order(order).await
    }
}
