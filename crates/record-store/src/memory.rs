//! In-memory [`Repository`] guarded by an `RwLock`.
//!
//! Same semantics as the store actor without spawning a task, which makes it the
//! cheapest collaborator for unit-testing services.

use crate::error::StoreError;
use crate::record::Record;
use crate::repository::Repository;
use crate::table::RecordTable;
use async_trait::async_trait;
use std::sync::RwLock;

pub struct InMemoryRepository<T: Record> {
    table: RwLock<RecordTable<T>>,
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(RecordTable::new()),
        }
    }

    /// Builds a repository pre-loaded with `records`, saved in order.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut table = RecordTable::new();
        for record in records {
            table.save(record);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(table.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(table.find_by_id(&id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<T>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(table.find_by_name(name))
    }

    async fn save(&self, record: T) -> Result<T, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        Ok(table.save(record).0)
    }

    async fn delete_by_id(&self, id: T::Id) -> Result<(), StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        table.delete_by_id(&id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(table.find_all())
    }
}
