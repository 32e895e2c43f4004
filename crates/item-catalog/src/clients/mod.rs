//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod item_client;

pub use item_client::*;
