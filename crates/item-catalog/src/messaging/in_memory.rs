use super::message::{ProductMessage, PublishedEvent};
use crate::ports::{EventPublisher, PublishError};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, instrument};

/// In-process publisher backed by a Tokio broadcast channel.
///
/// Every subscriber receives every event published after it subscribed. Publishing
/// with no subscribers succeeds; the event is simply not observed by anyone.
/// Subscribers that fall more than `capacity` events behind lose the oldest ones.
#[derive(Debug, Clone)]
pub struct InMemoryPublisher {
    sender: broadcast::Sender<PublishedEvent>,
}

impl InMemoryPublisher {
    /// # Panics
    /// Panics if `capacity` is zero; [`CatalogConfig::validate`](crate::config::CatalogConfig::validate)
    /// rejects that value.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PublishedEvent> {
        self.sender.subscribe()
    }
}

#[async_trait]
impl EventPublisher for InMemoryPublisher {
    #[instrument(skip(self, message), fields(product_id = %message.product_id))]
    async fn publish(&self, topic: &str, message: &ProductMessage) -> Result<(), PublishError> {
        let payload = serde_json::to_string(message).map_err(|source| PublishError::Encode {
            topic: topic.to_string(),
            source,
        })?;
        let event = PublishedEvent {
            topic: topic.to_string(),
            payload,
        };
        match self.sender.send(event) {
            Ok(receivers) => debug!(receivers, "Published"),
            Err(_) => debug!("Published with no subscribers"),
        }
        Ok(())
    }
}
