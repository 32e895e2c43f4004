use crate::messaging::ProductMessage;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    /// The message could not be serialized for the wire.
    #[error("Failed to encode message for topic {topic}: {source}")]
    Encode {
        topic: String,
        #[source]
        source: serde_json::Error,
    },

    /// The messaging backend refused or lost the message.
    #[error("Failed to publish to topic {topic}: {reason}")]
    Transport { topic: String, reason: String },
}

/// Outbound notifications. Calls are fire-and-forget: no acknowledgement from
/// consumers is awaited.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, topic: &str, message: &ProductMessage) -> Result<(), PublishError>;
}
