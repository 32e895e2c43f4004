use crate::model::ProductId;
use serde::{Deserialize, Serialize};

/// Payload of an availability notification: the product that has an item available.
///
/// Encoded as JSON with camelCase keys, e.g. `{"productId":10}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMessage {
    pub product_id: ProductId,
}

/// A message as it left the publisher: topic plus encoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedEvent {
    pub topic: String,
    pub payload: String,
}

impl PublishedEvent {
    pub fn decode(&self) -> Result<ProductMessage, serde_json::Error> {
        serde_json::from_str(&self.payload)
    }
}
