//! Intents and deferred responses for [`CatalogBrowser`](crate::model::CatalogBrowser)
//! sessions.

use crate::catalog::CatalogError;
use crate::model::{Category, CategoryId, FoodId, FoodSummary, RequestSeq};

/// Payload for opening a browser session. The session starts unfiltered.
#[derive(Debug, Clone, Default)]
pub struct BrowserCreate;

#[derive(Debug)]
pub enum BrowserAction {
    /// Re-fetches the category list.
    LoadCategories,
    /// Re-fetches foods for the current selection.
    LoadFoods,
    SelectCategory(CategoryId),
    SearchByName(String),
    /// Asks the navigator for the food's detail screen.
    OpenFood(FoodId),
    /// Asks the navigator for the home screen.
    Leave,

    // --- Deferred responses, posted by the session to itself ---
    CategoriesLoaded {
        seq: RequestSeq,
        categories: Result<Vec<Category>, CatalogError>,
    },
    FoodsLoaded {
        seq: RequestSeq,
        foods: Result<Vec<FoodSummary>, CatalogError>,
    },
    SearchLoaded {
        seq: RequestSeq,
        term: String,
        foods: Result<Vec<FoodSummary>, CatalogError>,
    },
}
