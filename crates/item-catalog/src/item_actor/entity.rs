//! ActorEntity trait implementation for the Item domain type.
//!
//! Items are keyed by serial number, so the actor itself rejects a second item with a
//! serial number that is already stored.

use super::error::ItemError;
use crate::model::{Item, ItemFilter, ItemUpdate, SerialNumber};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Item {
    type Id = SerialNumber;
    type Create = Item;
    type Update = ItemUpdate;
    type Filter = ItemFilter;
    type Context = ();
    type Error = ItemError;

    fn id(&self) -> SerialNumber {
        self.serial_number.clone()
    }

    /// Accepts the fully built item as long as its serial number is usable as a key.
    fn from_create_params(params: Item) -> Result<Self, ItemError> {
        if params.serial_number.is_blank() {
            return Err(ItemError::InvalidSerialNumber(
                params.serial_number.as_str().to_string(),
            ));
        }
        Ok(params)
    }

    fn matches(&self, filter: &ItemFilter) -> bool {
        match filter {
            ItemFilter::ProductId(product_id) => self.product_id == *product_id,
        }
    }

    /// Only the status is mutable.
    async fn on_update(&mut self, update: ItemUpdate, _ctx: &()) -> Result<(), ItemError> {
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }
}
