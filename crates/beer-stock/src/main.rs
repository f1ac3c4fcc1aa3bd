use beer_stock::lifecycle::{BeerStockSystem, StockConfig};
use beer_stock::model::{BeerDto, BeerType};
use record_store::tracing::setup_tracing;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = StockConfig::from_env();
    setup_tracing(&config.log_filter);

    info!(?config, "Starting beer stock");

    let system = BeerStockSystem::new(&config);

    let span = tracing::info_span!("registration");
    let created = async {
        info!("Registering demo beer");
        system
            .service
            .create_beer(BeerDto {
                id: None,
                name: "Brahma".to_string(),
                brand: "Ambev".to_string(),
                max: 50,
                quantity: 10,
                beer_type: BeerType::Lager,
            })
            .await
    }
    .instrument(span)
    .await?;

    let Some(id) = created.id else {
        return Err("store returned a beer without an id".into());
    };
    info!(%id, name = %created.name, "Beer registered");

    let span = tracing::info_span!("restock");
    async {
        match system.service.increment(id, 40).await {
            Ok(beer) => info!(quantity = beer.quantity, max = beer.max, "Restocked"),
            Err(e) => error!(error = %e, "Restock failed"),
        }
        // One more unit goes past the ceiling.
        if let Err(e) = system.service.increment(id, 1).await {
            warn!(error = %e, "Restock rejected");
        }
    }
    .instrument(span)
    .await;

    for beer in system.service.list_all().await? {
        info!(?beer, "In stock");
    }

    #[cfg(feature = "http")]
    if config.serve {
        info!("Serving until Ctrl+C");
        beer_stock::http::serve(system.service.clone(), config.bind_addr, async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    }
    #[cfg(not(feature = "http"))]
    if config.serve {
        warn!("BEERSTOCK_SERVE is set but the binary was built without the http feature");
    }

    system.shutdown().await?;

    info!("Beer stock completed successfully");
    Ok(())
}
