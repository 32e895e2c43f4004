//! Error types for the Item actor.

use thiserror::Error;

/// Reasons the item actor refuses a record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// The serial number is empty or whitespace only.
    #[error("Invalid serial number: {0:?}")]
    InvalidSerialNumber(String),
}
