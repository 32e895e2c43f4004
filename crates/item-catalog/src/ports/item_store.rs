use crate::model::{Item, ProductId, SerialNumber};
use async_trait::async_trait;
use thiserror::Error;

/// Persistence failures, passed through the service layer untranslated.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// An item with this serial number is already stored.
    #[error("Item already exists: {0}")]
    Conflict(String),

    /// No item is stored under this serial number.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The store refused the record itself.
    #[error("Item rejected by store: {0}")]
    Rejected(String),

    /// The store could not be reached.
    #[error("Item store unavailable: {0}")]
    Unavailable(String),
}

impl From<String> for StoreError {
    fn from(msg: String) -> Self {
        StoreError::Unavailable(msg)
    }
}

/// Persistence of item records, keyed by serial number.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Item>, StoreError>;

    async fn find_by_serial_number(
        &self,
        serial_number: &SerialNumber,
    ) -> Result<Option<Item>, StoreError>;

    async fn find_by_product_id(&self, product_id: ProductId) -> Result<Vec<Item>, StoreError>;

    /// Stores a new item and returns the key it was stored under.
    /// A serial number that is already taken fails with [`StoreError::Conflict`].
    async fn create(&self, item: Item) -> Result<SerialNumber, StoreError>;

    /// Writes back an existing item and returns the stored state.
    async fn save(&self, item: Item) -> Result<Item, StoreError>;

    /// Removes an item. Unknown serial numbers are not an error.
    async fn delete_by_serial_number(&self, serial_number: &SerialNumber)
        -> Result<(), StoreError>;
}
