//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod browser_client;
pub mod composer_client;
pub mod favorite_client;

pub use browser_client::*;
pub use composer_client::*;
pub use favorite_client::*;
