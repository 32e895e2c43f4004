use item_catalog::config::CatalogConfig;
use item_catalog::lifecycle::CatalogSystem;
use item_catalog::messaging::{ProductMessage, PublishedEvent};
use item_catalog::model::{ItemStatus, ProductId, SerialNumber};
use item_catalog::ports::StoreError;
use item_catalog::service::ItemServiceError;
use tokio::sync::broadcast;

fn drain(events: &mut broadcast::Receiver<PublishedEvent>) -> Vec<PublishedEvent> {
    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }
    received
}

/// Full end-to-end run of one item through its lifecycle with the real actor.
#[tokio::test]
async fn test_item_lifecycle_scenario() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let mut events = system.publisher.subscribe();
    let serial = SerialNumber::from("SN1");

    // Create: non-operational, one notification
    let key = system
        .items
        .create_item(ProductId(10), serial.clone())
        .await
        .expect("Failed to create item");
    assert_eq!(key, serial);

    let item = system
        .items
        .find_by_serial_number(&serial)
        .await
        .unwrap()
        .expect("Item not found");
    assert_eq!(item.status, ItemStatus::NonOperational);
    assert_eq!(item.product_id, ProductId(10));

    let created = drain(&mut events);
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].topic, "product.unit_available");
    assert_eq!(
        created[0].decode().unwrap(),
        ProductMessage {
            product_id: ProductId(10)
        }
    );

    // Activate: operational, one more notification
    let item = system.items.set_operational(&serial, true).await.unwrap();
    assert_eq!(item.status, ItemStatus::Operational);
    assert_eq!(drain(&mut events).len(), 1);

    // Activate again: nothing
    let item = system.items.set_operational(&serial, true).await.unwrap();
    assert_eq!(item.status, ItemStatus::Operational);
    assert!(drain(&mut events).is_empty());

    // Delete
    system.items.delete_item(&serial).await.unwrap();
    assert!(system
        .items
        .find_by_serial_number(&serial)
        .await
        .unwrap()
        .is_none());
    assert!(drain(&mut events).is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_duplicate_serial_number_is_a_store_conflict() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let mut events = system.publisher.subscribe();

    system
        .items
        .create_item(ProductId(1), "SN1".into())
        .await
        .unwrap();
    let result = system.items.create_item(ProductId(2), "SN1".into()).await;

    assert!(matches!(
        result,
        Err(ItemServiceError::Store(StoreError::Conflict(_)))
    ));
    // Only the first create announced anything, and the stored item is unchanged
    assert_eq!(drain(&mut events).len(), 1);
    let item = system
        .items
        .find_by_serial_number(&"SN1".into())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.product_id, ProductId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_blank_serial_number_is_rejected() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let mut events = system.publisher.subscribe();

    let result = system.items.create_item(ProductId(1), "  ".into()).await;

    assert!(matches!(
        result,
        Err(ItemServiceError::Store(StoreError::Rejected(_)))
    ));
    assert!(drain(&mut events).is_empty());
    assert!(system.items.find_all_items().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_set_operational_on_unknown_serial_fails() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let mut events = system.publisher.subscribe();

    let result = system
        .items
        .set_operational(&"unknown-serial".into(), true)
        .await;

    match result {
        Err(ItemServiceError::NotFound(serial)) => assert_eq!(serial.as_str(), "unknown-serial"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
    assert!(drain(&mut events).is_empty());
    assert!(system.items.find_all_items().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deactivation_never_notifies() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let serial = SerialNumber::from("SN7");
    system
        .items
        .create_item(ProductId(7), serial.clone())
        .await
        .unwrap();
    system.items.set_operational(&serial, true).await.unwrap();

    // Subscribe after the notifying calls
    let mut events = system.publisher.subscribe();

    let item = system.items.set_operational(&serial, false).await.unwrap();
    assert_eq!(item.status, ItemStatus::NonOperational);

    // Already non-operational
    let item = system.items.set_operational(&serial, false).await.unwrap();
    assert_eq!(item.status, ItemStatus::NonOperational);

    assert!(drain(&mut events).is_empty());

    // Reactivation notifies again
    system.items.set_operational(&serial, true).await.unwrap();
    assert_eq!(drain(&mut events).len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_items_by_product_id() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    for (product, serial) in [(1, "A-1"), (1, "A-2"), (2, "B-1"), (1, "A-3")] {
        system
            .items
            .create_item(ProductId(product), serial.into())
            .await
            .unwrap();
    }

    let before = system.items.find_by_product_id(ProductId(1)).await.unwrap();
    assert_eq!(before.len(), 3);

    system
        .items
        .delete_items_by_product_id(ProductId(1))
        .await
        .unwrap();

    assert!(system
        .items
        .find_by_product_id(ProductId(1))
        .await
        .unwrap()
        .is_empty());
    for item in &before {
        assert!(system
            .items
            .find_by_serial_number(&item.serial_number)
            .await
            .unwrap()
            .is_none());
    }

    // Other products are untouched
    let remaining = system.items.find_all_items().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].serial_number.as_str(), "B-1");

    // Nothing left to delete is fine
    system
        .items
        .delete_items_by_product_id(ProductId(1))
        .await
        .unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_find_all_items_is_ordered_by_serial_number() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    assert!(system.items.find_all_items().await.unwrap().is_empty());

    for serial in ["SN3", "SN1", "SN2"] {
        system
            .items
            .create_item(ProductId(5), serial.into())
            .await
            .unwrap();
    }

    let serials: Vec<_> = system
        .items
        .find_all_items()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.serial_number.as_str().to_string())
        .collect();
    assert_eq!(serials, ["SN1", "SN2", "SN3"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_of_unknown_serial_is_a_no_op() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    system.items.delete_item(&"ghost".into()).await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_topic_is_used() {
    let config = CatalogConfig::from_toml_str(
        r#"
        [messaging]
        product_topic = "catalog"
        separator = "/"
        unit_available = "available"
        "#,
    )
    .unwrap();
    let system = CatalogSystem::new(&config);
    let mut events = system.publisher.subscribe();

    system
        .items
        .create_item(ProductId(3), "SN1".into())
        .await
        .unwrap();

    let received = drain(&mut events);
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].topic, "catalog/available");

    system.shutdown().await.unwrap();
}
