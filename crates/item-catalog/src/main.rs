//! # Item Catalog
//!
//! Runs one item through its lifecycle against the in-process store and publisher:
//!
//! 1. Create item `SN1` of product 10 (one notification)
//! 2. Switch it to operational (one more notification)
//! 3. Switch it to operational again (nothing happens)
//! 4. Delete it
//!
//! Set `CATALOG_CONFIG` to a TOML file to override the defaults, and `RUST_LOG` to
//! change verbosity.

use actor_framework::tracing::setup_tracing;
use item_catalog::config::CatalogConfig;
use item_catalog::lifecycle::CatalogSystem;
use item_catalog::messaging::PublishedEvent;
use item_catalog::model::{ProductId, SerialNumber};
use std::error::Error;
use tokio::sync::broadcast;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = CatalogConfig::load()?;
    setup_tracing(&config.logging.filter);

    info!("Starting item catalog");
    let system = CatalogSystem::new(&config);
    let mut events = system.publisher.subscribe();

    let product_id = ProductId(10);
    let serial_number = SerialNumber::from("SN1");

    let span = tracing::info_span!("item_creation");
    async {
        info!("Creating item");
        system
            .items
            .create_item(product_id, serial_number.clone())
            .await
    }
    .instrument(span)
    .await?;
    drain_events(&mut events);

    let span = tracing::info_span!("activation");
    let item = async {
        info!("Activating item");
        system.items.set_operational(&serial_number, true).await?;
        drain_events(&mut events);

        info!("Activating again");
        let item = system.items.set_operational(&serial_number, true).await?;
        drain_events(&mut events);
        Ok::<_, Box<dyn Error>>(item)
    }
    .instrument(span)
    .await?;
    info!(serial_number = %item.serial_number, status = ?item.status, "Item ready");

    system.items.delete_item(&serial_number).await?;
    match system.items.find_by_serial_number(&serial_number).await? {
        None => info!(%serial_number, "Item gone"),
        Some(item) => warn!(?item, "Item still present after delete"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

fn drain_events(events: &mut broadcast::Receiver<PublishedEvent>) {
    let mut received = 0;
    while let Ok(event) = events.try_recv() {
        received += 1;
        match event.decode() {
            Ok(message) => info!(
                topic = %event.topic,
                product_id = %message.product_id,
                "Availability notification"
            ),
            Err(e) => warn!(topic = %event.topic, error = %e, "Undecodable notification"),
        }
    }
    if received == 0 {
        info!("No notification");
    }
}
