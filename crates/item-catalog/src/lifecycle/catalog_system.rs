use crate::clients::ItemClient;
use crate::config::CatalogConfig;
use crate::item_actor;
use crate::messaging::InMemoryPublisher;
use crate::service::ItemLifecycleManager;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Item service wired to an in-process store actor and publisher.
pub type CatalogService = ItemLifecycleManager<ItemClient, InMemoryPublisher>;

/// The running catalog: the item actor plus the service in front of it.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&CatalogConfig::default());
/// let mut events = system.publisher.subscribe();
///
/// system.items.create_item(ProductId(10), "SN1".into()).await?;
/// let event = events.recv().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Lifecycle operations on items
    pub items: CatalogService,

    /// Handle to the publisher the service notifies through; use it to subscribe.
    pub publisher: InMemoryPublisher,

    handle: JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the item actor and wires the service to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &CatalogConfig) -> Self {
        let (item_actor, item_client) = item_actor::new(config.store.buffer_size);
        let handle = tokio::spawn(item_actor.run(()));

        let publisher = InMemoryPublisher::new(config.messaging.channel_capacity);
        let items = ItemLifecycleManager::new(
            ItemClient::new(item_client),
            publisher.clone(),
            config.messaging.clone(),
        );

        info!(
            topic = %config.messaging.unit_available_topic(),
            "Catalog system started"
        );
        Self {
            items,
            publisher,
            handle,
        }
    }

    /// Drops the service (and with it the last item client), then waits for the
    /// actor to drain and stop.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down catalog system...");
        drop(self.items);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Item actor task failed");
            return Err(e);
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}
