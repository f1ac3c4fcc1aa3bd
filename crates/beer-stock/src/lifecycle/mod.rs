//! # System Lifecycle
//!
//! Starts the store actor, wires the [`BeerService`] to its client, and shuts
//! the whole thing down again.
//!
//! Shutdown follows the channel-closure pattern: dropping the last handle to
//! the service drops the last [`StoreClient`], the actor's `recv()` returns
//! `None`, and the actor task finishes. Any clone of [`BeerStockSystem::service`]
//! still alive elsewhere (an HTTP router, say) keeps the actor running, so drop
//! those first.

pub mod config;

pub use config::*;

use crate::model::Beer;
use crate::service::BeerService;
use record_store::{StoreActor, StoreClient};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub type StoreBackedService = BeerService<StoreClient<Beer>>;

/// A running beer stock: the store actor task plus the service in front of it.
///
/// # Example
///
/// ```rust
/// use beer_stock::lifecycle::{BeerStockSystem, StockConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = BeerStockSystem::new(&StockConfig::default());
///     assert!(system.service.list_all().await.map_err(|e| e.to_string())?.is_empty());
///     system.shutdown().await
/// }
/// ```
pub struct BeerStockSystem {
    pub service: Arc<StoreBackedService>,
    handle: JoinHandle<()>,
}

impl BeerStockSystem {
    /// Spawns the store actor and builds the service around its client.
    ///
    /// Must be called from inside a Tokio runtime.
    pub fn new(config: &StockConfig) -> Self {
        let (actor, client) = StoreActor::<Beer>::new(config.store_buffer);
        let handle = tokio::spawn(actor.run());
        info!(buffer = config.store_buffer, "Beer stock started");

        Self {
            service: Arc::new(BeerService::new(client)),
            handle,
        }
    }

    /// Drops the service and waits for the store actor to finish.
    ///
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down beer stock...");
        drop(self.service);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Beer stock shutdown complete.");
        Ok(())
    }
}
