//! # Item Service
//!
//! [`ItemLifecycleManager`] is the façade callers use: lookups, creation, status
//! changes and deletion of items, plus the availability notification rule.
//!
//! It depends only on the [`ItemStore`](crate::ports::ItemStore) and
//! [`EventPublisher`](crate::ports::EventPublisher) traits, so tests can hand it a
//! mocked store or a recording publisher.

pub mod error;
pub mod item_lifecycle;

pub use error::*;
pub use item_lifecycle::*;
