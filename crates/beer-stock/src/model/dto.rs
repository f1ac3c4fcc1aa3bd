use super::beer::{BeerId, BeerType};
use serde::{Deserialize, Serialize};

/// The transfer shape of a beer, as it crosses the service boundary.
///
/// Same fields as [`Beer`](super::Beer). On the wire the style is called `type`,
/// and `id` is left out until the store has assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BeerId>,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

/// Payload for a stock increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityDto {
    pub quantity: u32,
}
