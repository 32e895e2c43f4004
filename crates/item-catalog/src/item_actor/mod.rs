//! # Item Actor
//!
//! The in-process item store: a [`ResourceActor`] that owns every [`Item`] record,
//! keyed by serial number.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Item`]
//! - [`error`] - [`ItemError`], the reasons a record is refused
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use item_catalog::item_actor;
//! use item_catalog::model::{Item, ProductId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = item_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let key = client.create(Item::new(ProductId(10), "SN1")).await.unwrap();
//!     assert_eq!(key.as_str(), "SN1");
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Item;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Item actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Item>, ResourceClient<Item>) {
    ResourceActor::new(buffer_size)
}
