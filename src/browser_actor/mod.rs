//! Catalog browser sessions: category list, food list, category filter and name search.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::BrowserClient;
use crate::framework::ResourceActor;
use crate::model::CatalogBrowser;

/// Creates a new browser actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CatalogBrowser>, BrowserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, BrowserClient::new(generic_client))
}
