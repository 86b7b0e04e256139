//! `reqwest`-backed Catalog Service.

use crate::catalog::{CatalogError, CatalogService};
use crate::model::{Category, CategoryId, FavoriteRef, FoodDetail, FoodId, FoodSummary, Order};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Catalog Service reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::new_with_client(http, base_url))
    }

    pub fn new_with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Response, CatalogError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "Catalog response");
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, CatalogError> {
        let response = self.send(endpoint, request).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    #[instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.fetch("GET /categories", self.http.get(self.url("/categories")))
            .await
    }

    #[instrument(skip(self))]
    async fn list_foods(&self, category: Option<CategoryId>) -> Result<Vec<FoodSummary>, CatalogError> {
        let mut request = self.http.get(self.url("/foods"));
        if let Some(category) = category {
            request = request.query(&[("category_like", category.0)]);
        }
        self.fetch("GET /foods", request).await
    }

    #[instrument(skip(self))]
    async fn search_foods(&self, name: &str) -> Result<Vec<FoodSummary>, CatalogError> {
        let request = self.http.get(self.url("/foods")).query(&[("name", name)]);
        self.fetch("GET /foods", request).await
    }

    #[instrument(skip(self))]
    async fn food_detail(&self, id: FoodId) -> Result<FoodDetail, CatalogError> {
        let url = self.url(&format!("/foods/{}?extras", id.0));
        self.fetch("GET /foods/{id}", self.http.get(url)).await
    }

    #[instrument(skip(self))]
    async fn list_favorites(&self) -> Result<Vec<FavoriteRef>, CatalogError> {
        self.fetch("GET /favorites", self.http.get(self.url("/favorites")))
            .await
    }

    #[instrument(skip(self, favorite), fields(food_id = %favorite.id))]
    async fn add_favorite(&self, favorite: &FavoriteRef) -> Result<(), CatalogError> {
        let request = self.http.post(self.url("/favorites")).json(favorite);
        self.send("POST /favorites", request).await.map(|_| ())
    }

    #[instrument(skip(self))]
    async fn remove_favorite(&self, id: FoodId) -> Result<(), CatalogError> {
        let request = self.http.delete(self.url(&format!("/favorites/{}", id.0)));
        self.send("DELETE /favorites/{id}", request).await.map(|_| ())
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn create_order(&self, order: &Order) -> Result<(), CatalogError> {
        let request = self.http.post(self.url("/orders")).json(order);
        self.send("POST /orders", request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let service =
            HttpCatalogService::new_with_client(reqwest::Client::new(), "http://localhost:3333/");
        assert_eq!(service.url("/foods"), "http://localhost:3333/foods");
    }
}
