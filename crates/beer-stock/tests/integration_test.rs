mod common;

use beer_stock::lifecycle::{BeerStockSystem, StockConfig};
use beer_stock::model::BeerId;
use beer_stock::service::BeerServiceError;
use common::{new_brahma, BeerDtoBuilder};

/// Full end-to-end test with the real store actor behind the service.
#[tokio::test]
async fn test_full_beer_stock_lifecycle() {
    let system = BeerStockSystem::new(&StockConfig::default());
    let service = &system.service;

    let created = service
        .create_beer(new_brahma())
        .await
        .expect("Failed to create beer");
    let id = created.id.expect("Store did not assign an id");
    assert_eq!(id, BeerId(1));

    let found = service
        .find_by_name("Brahma")
        .await
        .expect("Failed to find beer");
    assert_eq!(found, created);

    // Duplicate names are rejected and nothing is stored
    let duplicate = service.create_beer(new_brahma()).await;
    assert_eq!(
        duplicate,
        Err(BeerServiceError::AlreadyRegistered("Brahma".to_string()))
    );
    assert_eq!(service.list_all().await.unwrap().len(), 1);

    // Boundary: 10 of 50
    assert!(matches!(
        service.increment(id, 41).await,
        Err(BeerServiceError::StockExceeded { .. })
    ));
    assert_eq!(service.find_by_name("Brahma").await.unwrap().quantity, 10);
    assert_eq!(service.increment(id, 10).await.unwrap().quantity, 20);
    assert_eq!(service.increment(id, 30).await.unwrap().quantity, 50);

    service.delete_by_id(id).await.expect("Failed to delete beer");
    assert!(service.list_all().await.unwrap().is_empty());
    assert_eq!(
        service.delete_by_id(id).await,
        Err(BeerServiceError::not_found_id(id))
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_list_follows_id_order() {
    let system = BeerStockSystem::new(&StockConfig::default());

    for name in ["Skol", "Brahma", "Antarctica"] {
        system
            .service
            .create_beer(BeerDtoBuilder::default().id(None).name(name).build())
            .await
            .unwrap();
    }

    let names: Vec<String> = system
        .service
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|beer| beer.name)
        .collect();
    assert_eq!(names, ["Skol", "Brahma", "Antarctica"]);

    system.shutdown().await.unwrap();
}

/// Distinct beers restocked concurrently each land on their own record.
#[tokio::test]
async fn test_concurrent_increments_of_distinct_beers() {
    let system = BeerStockSystem::new(&StockConfig {
        store_buffer: 4,
        ..StockConfig::default()
    });

    let mut ids = Vec::new();
    for i in 0..8 {
        let created = system
            .service
            .create_beer(
                BeerDtoBuilder::default()
                    .id(None)
                    .name(&format!("Beer {i}"))
                    .build(),
            )
            .await
            .unwrap();
        ids.push(created.id.unwrap());
    }

    let tasks: Vec<_> = ids
        .iter()
        .map(|&id| {
            let service = system.service.clone();
            tokio::spawn(async move { service.increment(id, 5).await })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap().quantity, 15);
    }

    for beer in system.service.list_all().await.unwrap() {
        assert_eq!(beer.quantity, 15);
    }

    system.shutdown().await.unwrap();
}
