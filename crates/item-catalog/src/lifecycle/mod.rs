//! # System Lifecycle
//!
//! Starting, wiring and stopping the catalog.
//!
//! [`CatalogSystem::new`] creates the item actor, spawns it, and hands its client to an
//! [`ItemLifecycleManager`](crate::service::ItemLifecycleManager) together with an
//! [`InMemoryPublisher`](crate::messaging::InMemoryPublisher). The item actor has no
//! dependencies, so its context is `()`.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the service** - the `ItemClient` it owns is the last sender on the actor's channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued requests are served
//! 3. **Await completion** - [`CatalogSystem::shutdown`] joins the actor task
//!
//! Any `ItemClient` clone still alive elsewhere keeps the actor running, and shutdown
//! waits for it.
//!
//! ## Tracing
//!
//! Install a subscriber first with
//! [`actor_framework::tracing::setup_tracing`]; the filter comes from `RUST_LOG` or
//! `[logging] filter` in the config file.

pub mod catalog_system;

pub use catalog_system::*;
