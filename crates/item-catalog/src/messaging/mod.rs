//! Availability notifications: the message type and the in-process publisher.

pub mod in_memory;
pub mod message;

pub use in_memory::*;
pub use message::*;
