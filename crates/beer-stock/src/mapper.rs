//! Field-for-field conversion between [`BeerDto`] and [`Beer`].
//!
//! Both directions are total and lossless: `to_dto(to_entity(dto)) == dto` for
//! every dto, identifier included.

use crate::model::{Beer, BeerDto};

pub fn to_entity(dto: BeerDto) -> Beer {
    Beer {
        id: dto.id,
        name: dto.name,
        brand: dto.brand,
        max: dto.max,
        quantity: dto.quantity,
        beer_type: dto.beer_type,
    }
}

pub fn to_dto(beer: Beer) -> BeerDto {
    BeerDto {
        id: beer.id,
        name: beer.name,
        brand: beer.brand,
        max: beer.max,
        quantity: beer.quantity,
        beer_type: beer.beer_type,
    }
}

impl From<BeerDto> for Beer {
    fn from(dto: BeerDto) -> Self {
        to_entity(dto)
    }
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        to_dto(beer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BeerId, BeerType};

    fn sample(id: Option<BeerId>, beer_type: BeerType) -> BeerDto {
        BeerDto {
            id,
            name: "Brahma".to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type,
        }
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        for beer_type in BeerType::ALL {
            for id in [None, Some(BeerId(1)), Some(BeerId(u64::MAX))] {
                let dto = sample(id, beer_type);
                assert_eq!(to_dto(to_entity(dto.clone())), dto);
            }
        }
    }

    #[test]
    fn test_to_entity_copies_fields() {
        let beer: Beer = sample(Some(BeerId(9)), BeerType::Stout).into();
        assert_eq!(beer.id, Some(BeerId(9)));
        assert_eq!(beer.name, "Brahma");
        assert_eq!(beer.brand, "Ambev");
        assert_eq!((beer.quantity, beer.max), (10, 50));
        assert_eq!(beer.beer_type, BeerType::Stout);
    }
}
