//! Error types for the Beer service.

use crate::model::BeerId;
use record_store::StoreError;
use std::fmt::Display;
use thiserror::Error;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeerLookup {
    Name(String),
    Id(BeerId),
}

impl Display for BeerLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeerLookup::Name(name) => write!(f, "name {}", name),
            BeerLookup::Id(id) => write!(f, "id {}", id),
        }
    }
}

/// Errors that can occur during beer stock operations.
///
/// Every variant except `Store` is a deterministic rejection of the caller's
/// input against the current store state; none is worth retrying.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BeerServiceError {
    /// A beer with this name is already stored.
    #[error("Beer with name {0} already registered in the system")]
    AlreadyRegistered(String),

    /// No beer matches the lookup.
    #[error("Beer with {0} not found in the system")]
    NotFound(BeerLookup),

    /// The increment would take the quantity past `max`. Nothing was saved.
    #[error("Increment of {quantity} for beer with id {id} exceeds the max stock capacity")]
    StockExceeded { id: BeerId, quantity: u32 },

    /// The beer breaks a data-model rule (blank name, zero max, quantity above max).
    #[error("Invalid beer: {0}")]
    Invalid(String),

    /// The store could not be reached.
    #[error("Beer store error: {0}")]
    Store(#[from] StoreError),
}

impl BeerServiceError {
    pub fn not_found_name(name: impl Into<String>) -> Self {
        BeerServiceError::NotFound(BeerLookup::Name(name.into()))
    }

    pub fn not_found_id(id: BeerId) -> Self {
        BeerServiceError::NotFound(BeerLookup::Id(id))
    }
}
