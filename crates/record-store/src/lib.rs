//! # Record Store
//!
//! A keyed record store built on the **Actor Model**: one Tokio task owns the
//! records and answers requests sent by cheap, cloneable clients. Services depend
//! on the narrow [`Repository`] trait rather than on the actor, which keeps them
//! testable against an in-memory fake or an expectation mock.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`Record`]) - what the store needs from a stored type: id, name
//! 2. **Runtime Layer** ([`StoreActor`]) - message processing and exclusive ownership of the table
//! 3. **Interface Layer** ([`StoreClient`], [`Repository`]) - type-safe requests
//!
//! ## The Five Operations
//!
//! | Operation | Result |
//! |---|---|
//! | `find_by_id(id)` | `Option<T>` |
//! | `find_by_name(name)` | `Option<T>` (exact match, first in id order) |
//! | `save(record)` | persisted `T` with its store-assigned id |
//! | `delete_by_id(id)` | `()`; absent ids are a no-op |
//! | `find_all()` | `Vec<T>` in ascending id order |
//!
//! Identifiers are minted by the store from a counter starting at 1. A record
//! saved with an id that is present replaces the stored record; any other record
//! is inserted under a fresh id.
//!
//! ## Example
//!
//! ```rust
//! use record_store::{Record, StoreActor};
//!
//! #[derive(Clone, Debug)]
//! struct Keg { id: Option<u64>, name: String, litres: u32 }
//!
//! impl Record for Keg {
//!     type Id = u64;
//!     fn id(&self) -> Option<&u64> { self.id.as_ref() }
//!     fn set_id(&mut self, id: u64) { self.id = Some(id); }
//!     fn name(&self) -> &str { &self.name }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Keg>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let mut keg = client.save(Keg { id: None, name: "helles".into(), litres: 30 }).await.unwrap();
//!     keg.litres = 50;
//!     client.save(keg).await.unwrap();
//!
//!     let found = client.find_by_name("helles").await.unwrap().unwrap();
//!     assert_eq!(found.litres, 50);
//!     assert_eq!(client.find_all().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - The actor handles one request at a time, so each save or delete is atomic.
//! - A caller's read-then-save sequence is **not** atomic; nothing here locks a
//!   record between two requests.
//!
//! ## Testing
//!
//! See [`mock`] for the expectation-driven [`MockStore`](mock::MockStore) and
//! [`InMemoryRepository`] for a lock-guarded fake.

pub mod actor;
pub mod client;
pub mod error;
pub mod memory;
pub mod message;
pub mod mock;
pub mod record;
pub mod repository;
pub mod table;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use memory::InMemoryRepository;
pub use message::{Response, StoreRequest};
pub use record::Record;
pub use repository::Repository;
