//! # Browser Client
//!
//! Intents for the catalog screen. Every call returns once the intent is accepted; the
//! Catalog Service responses land in the session later and show up in `get` snapshots.

use crate::browser_actor::{BrowserAction, BrowserCreate, BrowserError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{BrowserId, CatalogBrowser, CategoryId, FoodId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the browser actor.
#[derive(Clone)]
pub struct BrowserClient {
    inner: ResourceClient<CatalogBrowser>,
}

impl BrowserClient {
    pub fn new(inner: ResourceClient<CatalogBrowser>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<CatalogBrowser> for BrowserClient {
    type Error = BrowserError;

    fn inner(&self) -> &ResourceClient<CatalogBrowser> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => BrowserError::SessionNotFound(id),
            other => other
                .into_entity_error::<BrowserError>()
                .unwrap_or_else(|e| BrowserError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl BrowserClient {
    /// Enters the catalog screen: loads categories and the unfiltered food list.
    #[instrument(skip(self))]
    pub async fn open(&self) -> Result<BrowserId, BrowserError> {
        debug!("Sending request");
        self.inner.create(BrowserCreate).await.map_err(Self::map_error)
    }

    async fn send(&self, id: BrowserId, action: BrowserAction) -> Result<(), BrowserError> {
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn load_categories(&self, id: BrowserId) -> Result<(), BrowserError> {
        self.send(id, BrowserAction::LoadCategories).await
    }

    #[instrument(skip(self))]
    pub async fn load_foods(&self, id: BrowserId) -> Result<(), BrowserError> {
        self.send(id, BrowserAction::LoadFoods).await
    }

    #[instrument(skip(self))]
    pub async fn select_category(&self, id: BrowserId, category: CategoryId) -> Result<(), BrowserError> {
        self.send(id, BrowserAction::SelectCategory(category)).await
    }

    #[instrument(skip(self))]
    pub async fn search_by_name(&self, id: BrowserId, term: &str) -> Result<(), BrowserError> {
        self.send(id, BrowserAction::SearchByName(term.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn open_food(&self, id: BrowserId, food_id: FoodId) -> Result<(), BrowserError> {
        self.send(id, BrowserAction::OpenFood(food_id)).await
    }

    /// Asks for the home screen. The session stays open until `delete`.
    #[instrument(skip(self))]
    pub async fn leave(&self, id: BrowserId) -> Result<(), BrowserError> {
        self.send(id, BrowserAction::Leave).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create};

    #[tokio::test]
    async fn test_open_sends_create() {
        let (client, mut receiver) = create_mock_client::<CatalogBrowser>(10);
        let browser_client = BrowserClient::new(client);

        let open_task = tokio::spawn(async move { browser_client.open().await });

        let (_, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        responder.send(Ok(BrowserId(1))).unwrap();

        assert_eq!(open_task.await.unwrap().unwrap(), BrowserId(1));
    }

    #[tokio::test]
    async fn test_search_sends_term() {
        let (client, mut receiver) = create_mock_client::<CatalogBrowser>(10);
        let browser_client = BrowserClient::new(client);

        let search_task =
            tokio::spawn(async move { browser_client.search_by_name(BrowserId(1), "Pizza").await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, BrowserId(1));
        match action {
            BrowserAction::SearchByName(term) => assert_eq!(term, "Pizza"),
            other => panic!("Expected SearchByName, got {:?}", other),
        }
        responder.send(Ok(())).unwrap();

        assert!(search_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_missing_session_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<CatalogBrowser>(10);
        let browser_client = BrowserClient::new(client);

        let task = tokio::spawn(async move { browser_client.leave(BrowserId(4)).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound("browser_4".into())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(BrowserError::SessionNotFound("browser_4".into()))
        );
    }
}
