use crate::model::SerialNumber;
use crate::ports::{PublishError, StoreError};
use thiserror::Error;

/// Failures surfaced by [`ItemLifecycleManager`](super::ItemLifecycleManager).
#[derive(Debug, Error)]
pub enum ItemServiceError {
    /// An operation required an item that is not stored.
    #[error("Item not found: {0}")]
    NotFound(SerialNumber),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}
