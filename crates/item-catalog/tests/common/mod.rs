use async_trait::async_trait;
use item_catalog::messaging::ProductMessage;
use item_catalog::ports::{EventPublisher, PublishError};
use std::sync::{Arc, Mutex};

/// Publisher that keeps every message it is handed, or refuses them all.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    published: Arc<Mutex<Vec<(String, ProductMessage)>>>,
    failing: bool,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every `publish` fails with a transport error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn published(&self) -> Vec<(String, ProductMessage)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, topic: &str, message: &ProductMessage) -> Result<(), PublishError> {
        if self.failing {
            return Err(PublishError::Transport {
                topic: topic.to_string(),
                reason: "broker unreachable".to_string(),
            });
        }
        self.published
            .lock()
            .unwrap()
            .push((topic.to_string(), *message));
        Ok(())
    }
}
