//! # Store Messages
//!
//! This module defines the request type passed from a `StoreClient` to its
//! `StoreActor`. Every variant carries the oneshot sender the actor answers on.

use crate::error::StoreError;
use crate::record::Record;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a [`StoreActor`](crate::StoreActor).
///
/// The variants map one-to-one onto the operations of
/// [`Repository`](crate::Repository): two lookups, one upsert, one delete and a
/// full listing. There is deliberately no partial update message; callers read,
/// modify and `Save` the whole record.
#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindByName {
        name: String,
        respond_to: Response<Option<T>>,
    },
    Save {
        record: T,
        respond_to: Response<T>,
    },
    DeleteById {
        id: T::Id,
        respond_to: Response<()>,
    },
    FindAll {
        respond_to: Response<Vec<T>>,
    },
}
