//! # Record Table
//!
//! The in-memory table shared by the store actor and the lock-guarded fake.
//! Records are keyed by identifier in a `BTreeMap`, so iteration order is
//! ascending id, which is also insertion order because ids only grow.

use crate::record::Record;
use std::collections::BTreeMap;

/// Outcome of [`RecordTable::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    Inserted,
    Replaced,
}

#[derive(Debug)]
pub struct RecordTable<T: Record> {
    records: BTreeMap<T::Id, T>,
    next_id: u64,
}

impl<T: Record> Default for RecordTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordTable<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: &T::Id) -> Option<T> {
        self.records.get(id).cloned()
    }

    /// First record, in id order, whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<T> {
        self.records.values().find(|r| r.name() == name).cloned()
    }

    /// Replaces the record if it carries an id already present in the table,
    /// otherwise assigns the next id and inserts it.
    ///
    /// A caller-supplied id that is not present is discarded: identifiers are
    /// only ever minted here.
    pub fn save(&mut self, mut record: T) -> (T, Saved) {
        if let Some(id) = record.id().cloned() {
            if let Some(slot) = self.records.get_mut(&id) {
                *slot = record.clone();
                return (record, Saved::Replaced);
            }
        }

        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        record.set_id(id.clone());
        self.records.insert(id, record.clone());
        (record, Saved::Inserted)
    }

    /// Returns `true` if a record was removed.
    pub fn delete_by_id(&mut self, id: &T::Id) -> bool {
        self.records.remove(id).is_some()
    }

    pub fn find_all(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }
}
