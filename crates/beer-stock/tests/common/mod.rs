#![allow(dead_code)]

use beer_stock::model::{Beer, BeerDto, BeerId, BeerType};

/// Builds the beer most tests start from: 10 of 50 Brahma lagers.
#[derive(Debug, Clone)]
pub struct BeerDtoBuilder {
    id: Option<BeerId>,
    name: String,
    brand: String,
    max: u32,
    quantity: u32,
    beer_type: BeerType,
}

impl Default for BeerDtoBuilder {
    fn default() -> Self {
        Self {
            id: Some(BeerId(1)),
            name: "Brahma".to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        }
    }
}

impl BeerDtoBuilder {
    pub fn id(mut self, id: Option<BeerId>) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn build(self) -> BeerDto {
        BeerDto {
            id: self.id,
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            beer_type: self.beer_type,
        }
    }

    pub fn entity(self) -> Beer {
        self.build().into()
    }
}

pub fn brahma() -> BeerDto {
    BeerDtoBuilder::default().build()
}

/// Brahma without an id, the shape a client sends on create.
pub fn new_brahma() -> BeerDto {
    BeerDtoBuilder::default().id(None).build()
}
