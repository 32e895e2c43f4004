//! # Item Client
//!
//! Wraps a `ResourceClient<Item>` and exposes it as an [`ItemStore`], translating
//! framework errors into [`StoreError`].
use crate::model::{Item, ItemFilter, ItemUpdate, ProductId, SerialNumber};
use crate::ports::{ItemStore, StoreError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Item actor.
#[derive(Clone)]
pub struct ItemClient {
    inner: ResourceClient<Item>,
}

impl ItemClient {
    pub fn new(inner: ResourceClient<Item>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Item> for ItemClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Item> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Conflict(key) => StoreError::Conflict(key),
            FrameworkError::NotFound(key) => StoreError::NotFound(key),
            FrameworkError::EntityError(e) => StoreError::Rejected(e.to_string()),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                StoreError::Unavailable(e.to_string())
            }
        }
    }
}

#[async_trait]
impl ItemStore for ItemClient {
    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        self.list(None).await
    }

    async fn find_by_serial_number(
        &self,
        serial_number: &SerialNumber,
    ) -> Result<Option<Item>, StoreError> {
        self.get(serial_number.clone()).await
    }

    async fn find_by_product_id(&self, product_id: ProductId) -> Result<Vec<Item>, StoreError> {
        self.list(Some(ItemFilter::ProductId(product_id))).await
    }

    #[instrument(skip(self, item), fields(serial_number = %item.serial_number))]
    async fn create(&self, item: Item) -> Result<SerialNumber, StoreError> {
        debug!("Sending request");
        self.inner.create(item).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, item), fields(serial_number = %item.serial_number))]
    async fn save(&self, item: Item) -> Result<Item, StoreError> {
        debug!(status = ?item.status, "Sending request");
        let update = ItemUpdate {
            status: Some(item.status),
        };
        self.inner
            .update(item.serial_number, update)
            .await
            .map_err(Self::map_error)
    }

    async fn delete_by_serial_number(
        &self,
        serial_number: &SerialNumber,
    ) -> Result<(), StoreError> {
        match self.delete(serial_number.clone()).await {
            Err(StoreError::NotFound(_)) => {
                debug!(%serial_number, "Nothing to delete");
                Ok(())
            }
            result => result,
        }
    }
}
