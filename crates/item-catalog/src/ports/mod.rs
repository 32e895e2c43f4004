//! Narrow interfaces the item service depends on.
//!
//! - [`ItemStore`] - persistence, implemented by [`ItemClient`](crate::clients::ItemClient)
//! - [`EventPublisher`] - notifications, implemented by
//!   [`InMemoryPublisher`](crate::messaging::InMemoryPublisher)

pub mod event_publisher;
pub mod item_store;

pub use event_publisher::*;
pub use item_store::*;
