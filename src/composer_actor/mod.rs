//! Order composer sessions: one food's detail, its extras, the quantity and submission.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::ComposerClient;
use crate::framework::ResourceActor;
use crate::model::OrderComposer;

/// Creates a new composer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderComposer>, ComposerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ComposerClient::new(generic_client))
}
