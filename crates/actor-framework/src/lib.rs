//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource stores in Rust. It implements a
//! **Resource-Oriented Architecture (ROA)** pattern on top of the **Actor Model**: each
//! resource type gets one actor that owns its records and serves a uniform
//! Create / Get / List / Update / Delete API over message passing.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - your records, their natural key and their rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and exclusive state ownership
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! You write the business rules **once** in the entity trait; the framework handles the
//! async message passing, key uniqueness and error reporting.
//!
//! ## Natural Keys
//!
//! Entities are stored under the key returned by [`ActorEntity::id`]. Creating a second
//! entity with an existing key fails with [`FrameworkError::Conflict`] and leaves the
//! stored one untouched. Updating or deleting an unknown key fails with
//! [`FrameworkError::NotFound`]; a `get` of an unknown key simply returns `None`.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - Clients are cheap clones of an mpsc sender and can be shared across tasks
//! - The actor stops once every client has been dropped
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, a queue of canned responses behind a real
//! `ResourceClient`, plus channel-level helpers for inspecting raw requests.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
