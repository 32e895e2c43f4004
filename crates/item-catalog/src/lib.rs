//! # Item Catalog
//!
//! Physical items of catalog products: serialized units that can be switched between
//! operational and non-operational, with an availability notification whenever a
//! product gains a usable unit.
//!
//! ## Core Components
//!
//! - **[model]**: [`Item`](model::Item), [`SerialNumber`](model::SerialNumber), [`ProductId`](model::ProductId)
//! - **[item_actor]**: the in-process item store, a [`ResourceActor`](actor_framework::ResourceActor) keyed by serial number
//! - **[clients]**: [`ItemClient`](clients::ItemClient), the store adapter over the actor
//! - **[ports]**: the [`ItemStore`](ports::ItemStore) and [`EventPublisher`](ports::EventPublisher) traits
//! - **[messaging]**: notification payloads and the broadcast publisher
//! - **[service]**: [`ItemLifecycleManager`](service::ItemLifecycleManager), the operations callers use
//! - **[config]**: TOML configuration
//! - **[lifecycle]**: [`CatalogSystem`](lifecycle::CatalogSystem), which starts and stops everything
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test clients without spawning full actors.

pub mod clients;
pub mod config;
pub mod item_actor;
pub mod lifecycle;
pub mod messaging;
pub mod model;
pub mod ports;
pub mod service;
