//! ActorEntity trait implementation for [`CatalogBrowser`].
//!
//! Every Catalog Service call is deferred: the intent returns at once and the response
//! comes back as a `*Loaded` action, which the session applies only if it answers the
//! latest query of its stream. Failed fetches are logged and leave the state as it was.

use super::{BrowserAction, BrowserCreate, BrowserError};
use crate::catalog::SharedCatalog;
use crate::framework::{ActorEntity, Mailbox};
use crate::model::{BrowserId, CatalogBrowser, FoodFilter, FoodQuery};
use crate::ui::SharedNavigator;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Collaborators of browser sessions.
#[derive(Clone)]
pub struct BrowserContext {
    pub catalog: SharedCatalog,
    pub navigator: SharedNavigator,
}

impl BrowserContext {
    pub fn new(catalog: SharedCatalog, navigator: SharedNavigator) -> Self {
        Self { catalog, navigator }
    }
}

fn fetch_categories(browser: &mut CatalogBrowser, ctx: &BrowserContext, mailbox: &Mailbox<CatalogBrowser>) {
    let seq = browser.begin_category_load();
    let catalog = ctx.catalog.clone();
    mailbox.defer(async move {
        BrowserAction::CategoriesLoaded {
            seq,
            categories: catalog.list_categories().await,
        }
    });
}

fn fetch_foods(query: FoodQuery, ctx: &BrowserContext, mailbox: &Mailbox<CatalogBrowser>) {
    let FoodQuery { seq, filter } = query;
    let catalog = ctx.catalog.clone();
    match filter {
        FoodFilter::Category(category) => mailbox.defer(async move {
            BrowserAction::FoodsLoaded {
                seq,
                foods: catalog.list_foods(category).await,
            }
        }),
        FoodFilter::Name(term) => mailbox.defer(async move {
            let foods = catalog.search_foods(&term).await;
            BrowserAction::SearchLoaded { seq, term, foods }
        }),
    }
}

#[async_trait]
impl ActorEntity for CatalogBrowser {
    type Id = BrowserId;
    type Create = BrowserCreate;
    type Action = BrowserAction;
    type ActionResult = ();
    type Context = BrowserContext;
    type Error = BrowserError;

    fn from_create_params(id: BrowserId, _params: BrowserCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id))
    }

    /// Entering the screen loads categories and the unfiltered food list.
    async fn on_create(&mut self, ctx: &BrowserContext, mailbox: &Mailbox<Self>) -> Result<(), Self::Error> {
        fetch_categories(self, ctx, mailbox);
        let query = self.load_foods();
        fetch_foods(query, ctx, mailbox);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: BrowserAction,
        ctx: &BrowserContext,
        mailbox: &Mailbox<Self>,
    ) -> Result<(), Self::Error> {
        match action {
            BrowserAction::LoadCategories => fetch_categories(self, ctx, mailbox),
            BrowserAction::LoadFoods => {
                let query = self.load_foods();
                fetch_foods(query, ctx, mailbox);
            }
            BrowserAction::SelectCategory(category) => {
                let query = self.select_category(category);
                fetch_foods(query, ctx, mailbox);
            }
            BrowserAction::SearchByName(term) => {
                let query = self.search(term);
                fetch_foods(query, ctx, mailbox);
            }
            BrowserAction::OpenFood(food_id) => ctx.navigator.navigate_to_detail(food_id),
            BrowserAction::Leave => ctx.navigator.navigate_home(),

            BrowserAction::CategoriesLoaded { seq, categories } => match categories {
                Ok(categories) => {
                    if !self.apply_categories(seq, categories) {
                        debug!(browser = %self.id, %seq, "Stale categories discarded");
                    }
                }
                Err(e) => warn!(browser = %self.id, %seq, error = %e, "Category load failed"),
            },
            BrowserAction::FoodsLoaded { seq, foods } => match foods {
                Ok(foods) => {
                    if !self.apply_foods(seq, foods) {
                        debug!(browser = %self.id, %seq, "Stale food listing discarded");
                    }
                }
                Err(e) => warn!(browser = %self.id, %seq, error = %e, "Food load failed"),
            },
            BrowserAction::SearchLoaded { seq, term, foods } => match foods {
                Ok(foods) => {
                    if !self.is_latest_food_query(seq) {
                        debug!(browser = %self.id, %seq, "Stale search discarded");
                    } else if let Some(query) = self.apply_search(seq, &term, foods) {
                        debug!(browser = %self.id, selected = ?self.selected_category, "Exact match selected category");
                        fetch_foods(query, ctx, mailbox);
                    }
                }
                Err(e) => warn!(browser = %self.id, %seq, %term, error = %e, "Search failed"),
            },
        }
        Ok(())
    }
}
