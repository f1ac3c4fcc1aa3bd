//! Represents one beer SKU in the inventory.
//!
//! # Record Store
//! This struct implements the [`Record`] trait, allowing it to be kept by a
//! [`StoreActor`](record_store::StoreActor) or any other
//! [`Repository`](record_store::Repository). The store assigns `id` on first save
//! and looks beers up by `name`.
//!
//! The service keeps `quantity <= max` after every increment; the store itself
//! does not check it.
use record_store::Record;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Beers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeerId(pub u64);

impl From<u64> for BeerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for BeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of beer styles the stock tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

impl BeerType {
    pub const ALL: [BeerType; 7] = [
        BeerType::Lager,
        BeerType::Malzbier,
        BeerType::Witbier,
        BeerType::Weiss,
        BeerType::Ale,
        BeerType::Ipa,
        BeerType::Stout,
    ];

    /// Human-readable style name.
    pub fn description(&self) -> &'static str {
        match self {
            BeerType::Lager => "Lager",
            BeerType::Malzbier => "Malzbier",
            BeerType::Witbier => "Witbier",
            BeerType::Weiss => "Weiss",
            BeerType::Ale => "Ale",
            BeerType::Ipa => "IPA",
            BeerType::Stout => "Stout",
        }
    }
}

impl Display for BeerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    pub id: Option<BeerId>,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    pub beer_type: BeerType,
}

impl Beer {
    /// Creates an unsaved Beer.
    ///
    /// # Arguments
    /// * `name` - Unique product name
    /// * `brand` - Brewer or brand, free-form
    /// * `max` - Capacity ceiling
    /// * `quantity` - Units currently in stock
    /// * `beer_type` - Style
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        max: u32,
        quantity: u32,
        beer_type: BeerType,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            brand: brand.into(),
            max,
            quantity,
            beer_type,
        }
    }

    /// Quantity after adding `amount`, or `None` if it would pass `max`.
    ///
    /// Reaching `max` exactly is allowed. Arithmetic overflow counts as passing it.
    pub fn quantity_after(&self, amount: u32) -> Option<u32> {
        self.quantity
            .checked_add(amount)
            .filter(|total| *total <= self.max)
    }
}

impl Record for Beer {
    type Id = BeerId;

    fn id(&self) -> Option<&BeerId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: BeerId) {
        self.id = Some(id);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
