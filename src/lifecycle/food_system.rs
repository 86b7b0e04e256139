use crate::catalog::SharedCatalog;
use crate::browser_actor::BrowserContext;
use crate::clients::{BrowserClient, ComposerClient, FavoriteClient};
use crate::composer_actor::ComposerContext;
use crate::favorite_actor::FavoriteContext;
use crate::framework::ActorClient;
use crate::lifecycle::{FoodScreen, ScreenError};
use crate::model::FoodId;
use crate::submitter::OrderSubmitter;
use crate::ui::{SharedAlerts, SharedNavigator};
use tracing::{error, info, instrument, warn};

/// The outside world the sessions talk to.
#[derive(Clone)]
pub struct Collaborators {
    pub catalog: SharedCatalog,
    pub navigator: SharedNavigator,
    pub alerts: SharedAlerts,
}

/// The runtime orchestrator of the food catalog client.
///
/// `FoodSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the three session actors
/// - **Dependency Wiring**: Handing each actor the Catalog Service, navigator and alert
///   sink it needs when it starts running
/// - **Screen Coordination**: Opening the composer and favorite sessions of a food
///   detail screen together, see [`FoodScreen`]
///
/// # Example
///
/// ```ignore
/// let system = FoodSystem::new(collaborators, 32);
///
/// let browser = system.browser_client.open().await?;
/// system.browser_client.select_category(browser, CategoryId(2)).await?;
///
/// let screen = system.open_food(FoodId(3)).await?;
/// system.composer_client.increment_food(screen.composer).await?;
/// screen.toggle_favorite().await?;
/// system.composer_client.submit(screen.composer).await?;
/// screen.close().await?;
///
/// system.shutdown().await?;
/// ```
pub struct FoodSystem {
    /// Client for catalog browser sessions
    pub browser_client: BrowserClient,

    /// Client for order composer sessions
    pub composer_client: ComposerClient,

    /// Client for favorite toggle sessions
    pub favorite_client: FavoriteClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl FoodSystem {
    /// Creates the three actors and spawns them with their collaborators injected.
    pub fn new(collaborators: Collaborators, buffer_size: usize) -> Self {
        let Collaborators {
            catalog,
            navigator,
            alerts,
        } = collaborators;

        // 1. Create actors (no dependencies)
        let (browser_actor, browser_client) = crate::browser_actor::new(buffer_size);
        let (composer_actor, composer_client) = crate::composer_actor::new(buffer_size);
        let (favorite_actor, favorite_client) = crate::favorite_actor::new(buffer_size);

        // 2. Start actors with injected context
        let submitter = OrderSubmitter::new(catalog.clone(), navigator.clone(), alerts);
        let browser_handle =
            tokio::spawn(browser_actor.run(BrowserContext::new(catalog.clone(), navigator)));
        let composer_handle =
            tokio::spawn(composer_actor.run(ComposerContext::new(catalog.clone(), submitter)));
        let favorite_handle = tokio::spawn(favorite_actor.run(FavoriteContext::new(catalog)));

        Self {
            browser_client,
            composer_client,
            favorite_client,
            handles: vec![browser_handle, composer_handle, favorite_handle],
        }
    }

    /// Enters the detail screen of `food_id`: opens its composer and favorite sessions.
    ///
    /// Both initial loads run concurrently. If one session cannot be opened the other is
    /// closed again.
    #[instrument(skip(self))]
    pub async fn open_food(&self, food_id: FoodId) -> Result<FoodScreen, ScreenError> {
        let (composer, favorite) = tokio::join!(
            self.composer_client.open(food_id),
            self.favorite_client.open(food_id)
        );
        match (composer, favorite) {
            (Ok(composer), Ok(favorite)) => Ok(FoodScreen::new(
                food_id,
                composer,
                favorite,
                self.composer_client.clone(),
                self.favorite_client.clone(),
            )),
            (Ok(composer), Err(e)) => {
                if let Err(cleanup) = self.composer_client.delete(composer).await {
                    warn!(%composer, error = %cleanup, "Composer cleanup failed");
                }
                Err(e.into())
            }
            (Err(e), Ok(favorite)) => {
                if let Err(cleanup) = self.favorite_client.delete(favorite).await {
                    warn!(%favorite, error = %cleanup, "Favorite cleanup failed");
                }
                Err(e.into())
            }
            (Err(e), Err(_)) => Err(e.into()),
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels; each actor drains its queue and
    /// exits. Deferred work still in flight holds only weak senders and does not delay
    /// shutdown. [`FoodScreen`]s hold client clones, so they must be closed or dropped
    /// first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.browser_client);
        drop(self.composer_client);
        drop(self.favorite_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
