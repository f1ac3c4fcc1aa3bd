//! # Beer Service
//!
//! The only component with decision logic. It enforces name uniqueness when a
//! beer is created and the capacity ceiling when stock is incremented, and turns
//! store misses into typed [`BeerServiceError::NotFound`] failures.
//!
//! ## Structure
//!
//! - [`BeerService`] - stateless facade over a [`Repository<Beer>`]
//! - [`error`] - [`BeerServiceError`] and [`BeerLookup`]
//!
//! ## Usage
//!
//! ```rust
//! use beer_stock::model::{BeerDto, BeerType};
//! use beer_stock::service::BeerService;
//! use record_store::InMemoryRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = BeerService::new(InMemoryRepository::new());
//!
//!     let created = service
//!         .create_beer(BeerDto {
//!             id: None,
//!             name: "Brahma".to_string(),
//!             brand: "Ambev".to_string(),
//!             max: 50,
//!             quantity: 10,
//!             beer_type: BeerType::Lager,
//!         })
//!         .await?;
//!
//!     let id = created.id.expect("store assigns an id");
//!     let restocked = service.increment(id, 40).await?;
//!     assert_eq!(restocked.quantity, 50);
//!     assert!(service.increment(id, 1).await.is_err());
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Each operation is a check followed by at most one mutating store call, and
//! the pair is not atomic. Two increments of the same beer racing each other can
//! both pass the ceiling check; the later save wins.

pub mod error;

pub use error::*;

use crate::mapper::{to_dto, to_entity};
use crate::model::{Beer, BeerDto, BeerId};
use record_store::Repository;
use tracing::{debug, info, instrument, warn};

/// Stateless facade over a beer repository.
///
/// The repository is passed in at construction; the service never builds its
/// own collaborators.
pub struct BeerService<R> {
    repository: R,
}

impl<R: Repository<Beer>> BeerService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Stores a new beer.
    ///
    /// Any `id` on the input is ignored: identifiers are assigned by the store.
    ///
    /// # Errors
    /// - `Invalid` if the name is blank, `max` is zero or `quantity > max`
    /// - `AlreadyRegistered` if a beer with the same name exists
    #[instrument(skip(self, beer_dto), fields(name = %beer_dto.name))]
    pub async fn create_beer(&self, beer_dto: BeerDto) -> Result<BeerDto, BeerServiceError> {
        debug!(?beer_dto, "create_beer called");
        validate(&beer_dto)?;
        self.verify_if_is_already_registered(&beer_dto.name).await?;

        let mut beer = to_entity(beer_dto);
        beer.id = None;
        let saved = self.repository.save(beer).await?;
        info!(id = ?saved.id, "Beer created");
        Ok(to_dto(saved))
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<BeerDto, BeerServiceError> {
        self.repository
            .find_by_name(name)
            .await?
            .map(to_dto)
            .ok_or_else(|| BeerServiceError::not_found_name(name))
    }

    /// Every stored beer, in store order. An empty store yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<BeerDto>, BeerServiceError> {
        let beers = self.repository.find_all().await?;
        Ok(beers.into_iter().map(to_dto).collect())
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: BeerId) -> Result<(), BeerServiceError> {
        self.verify_if_exists(id).await?;
        self.repository.delete_by_id(id).await?;
        info!(%id, "Beer deleted");
        Ok(())
    }

    /// Adds `quantity_to_increment` units to the stock of beer `id`.
    ///
    /// # Errors
    /// - `NotFound` if no beer has this id
    /// - `StockExceeded` if the new quantity would be above `max`; the stored
    ///   beer is left untouched
    #[instrument(skip(self))]
    pub async fn increment(
        &self,
        id: BeerId,
        quantity_to_increment: u32,
    ) -> Result<BeerDto, BeerServiceError> {
        let mut beer = self.verify_if_exists(id).await?;

        let Some(quantity) = beer.quantity_after(quantity_to_increment) else {
            warn!(%id, current = beer.quantity, max = beer.max, "Stock ceiling exceeded");
            return Err(BeerServiceError::StockExceeded {
                id,
                quantity: quantity_to_increment,
            });
        };

        beer.quantity = quantity;
        let saved = self.repository.save(beer).await?;
        info!(%id, quantity = saved.quantity, "Stock incremented");
        Ok(to_dto(saved))
    }

    async fn verify_if_is_already_registered(&self, name: &str) -> Result<(), BeerServiceError> {
        match self.repository.find_by_name(name).await? {
            Some(_) => {
                warn!(name, "Beer already registered");
                Err(BeerServiceError::AlreadyRegistered(name.to_string()))
            }
            None => Ok(()),
        }
    }

    async fn verify_if_exists(&self, id: BeerId) -> Result<Beer, BeerServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BeerServiceError::not_found_id(id))
    }
}

fn validate(beer_dto: &BeerDto) -> Result<(), BeerServiceError> {
    if beer_dto.name.trim().is_empty() {
        return Err(BeerServiceError::Invalid("name must not be blank".to_string()));
    }
    if beer_dto.max == 0 {
        return Err(BeerServiceError::Invalid("max must be greater than zero".to_string()));
    }
    if beer_dto.quantity > beer_dto.max {
        return Err(BeerServiceError::Invalid(format!(
            "quantity {} is above max {}",
            beer_dto.quantity, beer_dto.max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BeerType;
    use record_store::InMemoryRepository;

    fn brahma() -> BeerDto {
        BeerDto {
            id: None,
            name: "Brahma".to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        }
    }

    async fn service_with_brahma() -> (BeerService<InMemoryRepository<Beer>>, BeerId) {
        let service = BeerService::new(InMemoryRepository::new());
        let created = service.create_beer(brahma()).await.unwrap();
        (service, created.id.unwrap())
    }

    #[tokio::test]
    async fn test_created_beer_can_be_found_by_name() {
        let (service, id) = service_with_brahma().await;

        let found = service.find_by_name("Brahma").await.unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(BeerDto { id: None, ..found }, brahma());
    }

    #[tokio::test]
    async fn test_create_ignores_caller_supplied_id() {
        let service = BeerService::new(InMemoryRepository::new());
        let created = service
            .create_beer(BeerDto {
                id: Some(BeerId(77)),
                ..brahma()
            })
            .await
            .unwrap();
        assert_eq!(created.id, Some(BeerId(1)));
    }

    #[tokio::test]
    async fn test_duplicate_name_leaves_store_unchanged() {
        let (service, _) = service_with_brahma().await;

        let result = service
            .create_beer(BeerDto {
                brand: "Other".to_string(),
                ..brahma()
            })
            .await;
        assert_eq!(
            result,
            Err(BeerServiceError::AlreadyRegistered("Brahma".to_string()))
        );
        assert_eq!(service.repository().len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_beers_are_rejected() {
        let service = BeerService::new(InMemoryRepository::new());
        let invalid = [
            BeerDto {
                name: "  ".to_string(),
                ..brahma()
            },
            BeerDto {
                max: 0,
                quantity: 0,
                ..brahma()
            },
            BeerDto {
                quantity: 51,
                ..brahma()
            },
        ];
        for beer_dto in invalid {
            let result = service.create_beer(beer_dto).await;
            assert!(matches!(result, Err(BeerServiceError::Invalid(_))));
        }
        assert!(service.repository().is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_increment_boundary() {
        let (service, id) = service_with_brahma().await;

        let result = service.increment(id, 41).await;
        assert_eq!(
            result,
            Err(BeerServiceError::StockExceeded { id, quantity: 41 })
        );
        assert_eq!(service.find_by_name("Brahma").await.unwrap().quantity, 10);

        assert_eq!(service.increment(id, 10).await.unwrap().quantity, 20);
        assert_eq!(service.increment(id, 30).await.unwrap().quantity, 50);
        assert_eq!(service.increment(id, 0).await.unwrap().quantity, 50);
        assert!(service.increment(id, 1).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_ids_and_names_are_not_found() {
        let (service, id) = service_with_brahma().await;
        let missing = BeerId(id.0 + 1);

        assert_eq!(
            service.increment(missing, 1).await,
            Err(BeerServiceError::not_found_id(missing))
        );
        assert_eq!(
            service.delete_by_id(missing).await,
            Err(BeerServiceError::not_found_id(missing))
        );
        assert_eq!(
            service.find_by_name("Skol").await,
            Err(BeerServiceError::not_found_name("Skol"))
        );
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let service = BeerService::new(InMemoryRepository::new());
        assert!(service.list_all().await.unwrap().is_empty());

        let created = service.create_beer(brahma()).await.unwrap();
        assert_eq!(service.list_all().await.unwrap(), vec![created.clone()]);

        service.delete_by_id(created.id.unwrap()).await.unwrap();
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BeerServiceError::not_found_name("Skol").to_string(),
            "Beer with name Skol not found in the system"
        );
        assert_eq!(
            BeerServiceError::StockExceeded {
                id: BeerId(3),
                quantity: 41
            }
            .to_string(),
            "Increment of 41 for beer with id 3 exceeds the max stock capacity"
        );
    }
}
