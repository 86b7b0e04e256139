//! # Catalog Browser State
//!
//! The state behind the catalog screen: the category list, the food list, the selected
//! category and the last search term.
//!
//! Every query the browser issues is tagged with a [`RequestSeq`]. Category loads and
//! food loads are separate streams; food listings and name searches share one because
//! both replace the food list. A response that is not the latest of its stream is
//! discarded, so rapid category changes cannot leave an older listing on screen.

use crate::model::{Category, CategoryId, FoodSummary, RequestSeq, RequestSequence};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for browser sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowserId(pub u32);

impl From<u32> for BrowserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BrowserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "browser_{}", self.0)
    }
}

/// What a food query asks the Catalog Service for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodFilter {
    /// `GET /foods`, filtered by category when one is selected.
    Category(Option<CategoryId>),
    /// `GET /foods?name=<term>`.
    Name(String),
}

/// A food query to run, tagged for staleness checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodQuery {
    pub seq: RequestSeq,
    pub filter: FoodFilter,
}

#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    pub id: BrowserId,
    pub categories: Vec<Category>,
    pub foods: Vec<FoodSummary>,
    pub selected_category: Option<CategoryId>,
    pub search_term: String,
    category_requests: RequestSequence,
    food_requests: RequestSequence,
}

impl CatalogBrowser {
    pub fn new(id: BrowserId) -> Self {
        Self {
            id,
            categories: Vec::new(),
            foods: Vec::new(),
            selected_category: None,
            search_term: String::new(),
            category_requests: RequestSequence::default(),
            food_requests: RequestSequence::default(),
        }
    }

    pub fn begin_category_load(&mut self) -> RequestSeq {
        self.category_requests.issue()
    }

    /// Replaces the category list if `seq` is the latest category load.
    pub fn apply_categories(&mut self, seq: RequestSeq, categories: Vec<Category>) -> bool {
        if !self.category_requests.is_latest(seq) {
            return false;
        }
        self.categories = categories;
        true
    }

    /// Lists foods for the current selection (all foods when nothing is selected).
    pub fn load_foods(&mut self) -> FoodQuery {
        FoodQuery {
            seq: self.food_requests.issue(),
            filter: FoodFilter::Category(self.selected_category),
        }
    }

    /// Selecting the current category again still issues a query.
    pub fn select_category(&mut self, id: CategoryId) -> FoodQuery {
        self.selected_category = Some(id);
        self.load_foods()
    }

    pub fn search(&mut self, term: impl Into<String>) -> FoodQuery {
        self.search_term = term.into();
        FoodQuery {
            seq: self.food_requests.issue(),
            filter: FoodFilter::Name(self.search_term.clone()),
        }
    }

    /// Replaces the food list if `seq` is the latest food query.
    pub fn apply_foods(&mut self, seq: RequestSeq, foods: Vec<FoodSummary>) -> bool {
        if !self.food_requests.is_latest(seq) {
            return false;
        }
        self.foods = foods;
        true
    }

    /// Applies a name search result.
    ///
    /// An entry whose name equals `term` exactly selects that entry's category. When that
    /// changes the selection, the returned query lists the new category and supersedes
    /// the search result. Stale results change nothing and return `None`.
    pub fn apply_search(
        &mut self,
        seq: RequestSeq,
        term: &str,
        foods: Vec<FoodSummary>,
    ) -> Option<FoodQuery> {
        if !self.apply_foods(seq, foods) {
            return None;
        }
        let exact = self
            .foods
            .iter()
            .find(|food| food.name == term)
            .map(|food| food.category_id)?;
        if self.selected_category == Some(exact) {
            return None;
        }
        Some(self.select_category(exact))
    }

    pub fn is_latest_food_query(&self, seq: RequestSeq) -> bool {
        self.food_requests.is_latest(seq)
    }
}
