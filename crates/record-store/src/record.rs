//! # Record Trait
//!
//! The `Record` trait is the contract a type must satisfy to be kept by the store.
//! The store only needs three things from a record: where its identifier lives,
//! how to stamp a freshly assigned identifier onto it, and the name used for the
//! secondary lookup.
//!
//! Identifiers are assigned by the store, never by callers. A record that has not
//! been saved yet reports `None` from [`Record::id`].

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be kept by a [`StoreActor`](crate::StoreActor)
/// or any other [`Repository`](crate::Repository).
///
/// We use an associated `Id` type so that a `Beer` store can only be asked for a
/// `BeerId`. The `From<u64>` bound lets the store mint identifiers from its counter,
/// and `Ord` gives every store the same iteration order (ascending id).
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this record.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The store-assigned identifier, or `None` if the record was never saved.
    fn id(&self) -> Option<&Self::Id>;

    /// Stamps a store-assigned identifier onto the record.
    fn set_id(&mut self, id: Self::Id);

    /// The secondary lookup key.
    fn name(&self) -> &str;
}
