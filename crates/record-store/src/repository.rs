//! # Repository Trait
//!
//! The narrow interface services depend on: exactly the five operations a
//! keyed record store offers. Services are generic over it, so the same service
//! runs against the store actor in production and against
//! [`InMemoryRepository`](crate::InMemoryRepository) or a
//! [`MockStore`](crate::mock::MockStore) client in tests.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::record::Record;
use async_trait::async_trait;

/// Keyed persistence for records of type `T`.
///
/// # Example
///
/// ```rust
/// use record_store::{InMemoryRepository, Record, Repository};
///
/// #[derive(Clone, Debug)]
/// struct Keg { id: Option<u64>, name: String }
///
/// impl Record for Keg {
///     type Id = u64;
///     fn id(&self) -> Option<&u64> { self.id.as_ref() }
///     fn set_id(&mut self, id: u64) { self.id = Some(id); }
///     fn name(&self) -> &str { &self.name }
/// }
///
/// async fn restock<R: Repository<Keg>>(repository: &R) {
///     if repository.find_by_name("porter").await.unwrap().is_none() {
///         repository.save(Keg { id: None, name: "porter".into() }).await.unwrap();
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let repository = InMemoryRepository::<Keg>::new();
///     restock(&repository).await;
///     restock(&repository).await;
///     assert_eq!(repository.find_all().await.unwrap().len(), 1);
/// }
/// ```
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError>;

    /// Fetch the first record whose name matches exactly.
    async fn find_by_name(&self, name: &str) -> Result<Option<T>, StoreError>;

    /// Insert the record if it is new, otherwise replace the stored one.
    /// Returns the persisted state, including the store-assigned id.
    async fn save(&self, record: T) -> Result<T, StoreError>;

    /// Remove a record. Removing an absent id is a no-op.
    async fn delete_by_id(&self, id: T::Id) -> Result<(), StoreError>;

    /// Every record, in ascending id order.
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;
}

#[async_trait]
impl<T: Record> Repository<T> for StoreClient<T> {
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        tracing::debug!("Sending request");
        StoreClient::find_by_id(self, id).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<T>, StoreError> {
        tracing::debug!("Sending request");
        StoreClient::find_by_name(self, name).await
    }

    #[tracing::instrument(skip(self, record))]
    async fn save(&self, record: T) -> Result<T, StoreError> {
        tracing::debug!(?record, "Sending request");
        StoreClient::save(self, record).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_by_id(&self, id: T::Id) -> Result<(), StoreError> {
        tracing::debug!("Sending request");
        StoreClient::delete_by_id(self, id).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        tracing::debug!("Sending request");
        StoreClient::find_all(self).await
    }
}
