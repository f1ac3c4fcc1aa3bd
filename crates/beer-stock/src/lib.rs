//! # Beer Stock
//!
//! Inventory backend for a beer distributor: register beers, look them up,
//! list and delete them, and restock without going past each beer's capacity.
//!
//! ## Core Components
//!
//! - **[model]**: the stored [`Beer`](model::Beer) record, its
//!   [`BeerDto`](model::BeerDto) transfer shape and [`BeerType`](model::BeerType).
//! - **[mapper]**: field-for-field conversion between the two.
//! - **[service]**: [`BeerService`](service::BeerService), which owns every
//!   business rule.
//! - **[lifecycle]**: starts the store actor and wires the service to it.
//! - **`http`** (feature `http`): axum routes over the service.
//!
//! Persistence comes from the `record-store` crate. The service only sees the
//! [`Repository`](record_store::Repository) trait, so tests run it against an
//! in-memory fake or an expectation mock.

pub mod lifecycle;
pub mod mapper;
pub mod model;
pub mod service;

#[cfg(feature = "http")]
pub mod http;
