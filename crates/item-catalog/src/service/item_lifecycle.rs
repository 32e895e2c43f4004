use super::error::ItemServiceError;
use crate::config::MessagingConfig;
use crate::messaging::ProductMessage;
use crate::model::{Item, ItemStatus, ProductId, SerialNumber};
use crate::ports::{EventPublisher, ItemStore};
use tracing::{debug, info, instrument};

/// Item lifecycle rules on top of a store and a publisher.
///
/// An availability notification for the item's product goes out after every
/// successful [`create_item`](Self::create_item) and after every transition into
/// [`ItemStatus::Operational`]. Nothing else publishes.
pub struct ItemLifecycleManager<S, P> {
    store: S,
    publisher: P,
    messaging: MessagingConfig,
}

impl<S, P> ItemLifecycleManager<S, P>
where
    S: ItemStore,
    P: EventPublisher,
{
    pub fn new(store: S, publisher: P, messaging: MessagingConfig) -> Self {
        Self {
            store,
            publisher,
            messaging,
        }
    }

    #[instrument(skip(self))]
    pub async fn find_all_items(&self) -> Result<Vec<Item>, ItemServiceError> {
        Ok(self.store.find_all().await?)
    }

    #[instrument(skip(self), fields(%serial_number))]
    pub async fn find_by_serial_number(
        &self,
        serial_number: &SerialNumber,
    ) -> Result<Option<Item>, ItemServiceError> {
        Ok(self.store.find_by_serial_number(serial_number).await?)
    }

    #[instrument(skip(self), fields(%product_id))]
    pub async fn find_by_product_id(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Item>, ItemServiceError> {
        Ok(self.store.find_by_product_id(product_id).await?)
    }

    /// Stores a new non-operational item, then announces its product.
    ///
    /// A rejected write (for example a duplicate serial number) publishes nothing.
    #[instrument(skip(self), fields(%product_id, %serial_number))]
    pub async fn create_item(
        &self,
        product_id: ProductId,
        serial_number: SerialNumber,
    ) -> Result<SerialNumber, ItemServiceError> {
        let key = self
            .store
            .create(Item::new(product_id, serial_number))
            .await?;
        info!(serial_number = %key, "Item created");

        self.notify_product_availability(product_id).await?;
        Ok(key)
    }

    /// Sets the item's status from `operational` and returns the resulting item.
    ///
    /// Unchanged status means no write and no notification.
    #[instrument(skip(self), fields(%serial_number))]
    pub async fn set_operational(
        &self,
        serial_number: &SerialNumber,
        operational: bool,
    ) -> Result<Item, ItemServiceError> {
        let mut item = self
            .store
            .find_by_serial_number(serial_number)
            .await?
            .ok_or_else(|| ItemServiceError::NotFound(serial_number.clone()))?;

        let target = ItemStatus::from_operational(operational);
        if item.status == target {
            debug!(status = ?target, "Status unchanged");
            return Ok(item);
        }

        item.status = target;
        let saved = self.store.save(item).await?;
        info!(status = ?saved.status, "Item status changed");

        if saved.status.is_operational() {
            self.notify_product_availability(saved.product_id).await?;
        }
        Ok(saved)
    }

    #[instrument(skip(self), fields(%serial_number))]
    pub async fn delete_item(&self, serial_number: &SerialNumber) -> Result<(), ItemServiceError> {
        self.store.delete_by_serial_number(serial_number).await?;
        info!("Item deleted");
        Ok(())
    }

    /// Deletes every item of the product, one store call per item.
    ///
    /// Stops at the first failed delete; items removed before it stay removed.
    #[instrument(skip(self), fields(%product_id))]
    pub async fn delete_items_by_product_id(
        &self,
        product_id: ProductId,
    ) -> Result<(), ItemServiceError> {
        let items = self.store.find_by_product_id(product_id).await?;
        for item in &items {
            self.store
                .delete_by_serial_number(&item.serial_number)
                .await?;
        }
        info!(deleted = items.len(), "Items deleted");
        Ok(())
    }

    async fn notify_product_availability(
        &self,
        product_id: ProductId,
    ) -> Result<(), ItemServiceError> {
        let topic = self.messaging.unit_available_topic();
        debug!(%topic, %product_id, "Notifying availability");
        self.publisher
            .publish(&topic, &ProductMessage { product_id })
            .await?;
        Ok(())
    }
}
