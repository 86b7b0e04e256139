//! Favorite toggle sessions: the favorite flag of the food being viewed.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::FavoriteClient;
use crate::framework::ResourceActor;
use crate::model::FavoriteToggle;

/// Creates a new favorite actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<FavoriteToggle>, FavoriteClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, FavoriteClient::new(generic_client))
}
