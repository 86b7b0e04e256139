//! Catalog data and the pure session state machines.
//!
//! The catalog types (`Category`, `FoodSummary`, `FoodDetail`, `FavoriteRef`, `Order`)
//! mirror the Catalog Service wire format. The session types (`CatalogBrowser`,
//! `OrderComposer`, `FavoriteToggle`) hold screen state and are hosted by the actors in
//! [`browser_actor`](crate::browser_actor), [`composer_actor`](crate::composer_actor) and
//! [`favorite_actor`](crate::favorite_actor).

pub mod browser;
pub mod category;
pub mod composer;
pub mod favorite;
pub mod favorite_toggle;
pub mod food;
pub mod order;
pub mod sequence;

pub use browser::*;
pub use category::*;
pub use composer::*;
pub use favorite::*;
pub use favorite_toggle::*;
pub use food::*;
pub use order::*;
pub use sequence::*;
