//! Demo: browse the catalog, compose an order for a pizza, favorite it and place it.

use food_catalog::config::AppConfig;
use food_catalog::framework::ActorClient;
use food_catalog::lifecycle::tracing::setup_tracing;
use food_catalog::lifecycle::{Collaborators, FoodSystem};
use food_catalog::ui::{TracingAlerts, TracingNavigator};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::load().map_err(|e| e.to_string())?;
    info!(backend = ?config.catalog.backend, base_url = %config.catalog.base_url, "Starting food catalog");

    let catalog = config.catalog.build().map_err(|e| e.to_string())?;
    let system = FoodSystem::new(
        Collaborators {
            catalog,
            navigator: Arc::new(TracingNavigator),
            alerts: Arc::new(TracingAlerts),
        },
        config.actor_buffer_size,
    );

    // Browse: open the catalog, search, pick the first hit
    let span = tracing::info_span!("browsing");
    let picked = async {
        let browser = system.browser_client.open().await.map_err(|e| e.to_string())?;
        system
            .browser_client
            .search_by_name(browser, "Pizza")
            .await
            .map_err(|e| e.to_string())?;

        // Responses arrive in the background
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        let snapshot = system
            .browser_client
            .get(browser)
            .await
            .map_err(|e| e.to_string())?
            .ok_or("browser session vanished")?;
        info!(
            categories = snapshot.categories.len(),
            foods = snapshot.foods.len(),
            selected = ?snapshot.selected_category,
            "Catalog loaded"
        );

        let picked = snapshot.foods.first().map(|food| food.id);
        if let Some(food_id) = picked {
            system
                .browser_client
                .open_food(browser, food_id)
                .await
                .map_err(|e| e.to_string())?;
        }
        system.browser_client.delete(browser).await.map_err(|e| e.to_string())?;
        Ok::<_, String>(picked)
    }
    .instrument(span)
    .await?;

    let Some(food_id) = picked else {
        info!("Nothing to order");
        return system.shutdown().await;
    };

    // Compose: two of them, one extra, favorite it
    let span = tracing::info_span!("composing", %food_id);
    let screen = async {
        let screen = system.open_food(food_id).await.map_err(|e| e.to_string())?;
        let composer = screen.composer_state().await.map_err(|e| e.to_string())?;

        system
            .composer_client
            .increment_food(screen.composer)
            .await
            .map_err(|e| e.to_string())?;
        if let Some(extra) = composer.extras.first() {
            system
                .composer_client
                .increment_extra(screen.composer, extra.id)
                .await
                .map_err(|e| e.to_string())?;
        }
        let is_favorite = screen.toggle_favorite().await.map_err(|e| e.to_string())?;
        let total = system
            .composer_client
            .total(screen.composer)
            .await
            .map_err(|e| e.to_string())?;
        info!(%total, is_favorite, "Order composed");
        Ok::<_, String>(screen)
    }
    .instrument(span)
    .await?;

    // Order
    let span = tracing::info_span!("ordering");
    let result = async { system.composer_client.submit(screen.composer).await }
        .instrument(span)
        .await;
    match result {
        Ok(order_id) => info!(%order_id, "Order placed successfully"),
        Err(e) => error!(error = %e, "Order failed"),
    }

    screen.close().await.map_err(|e| e.to_string())?;
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
