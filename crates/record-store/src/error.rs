//! # Store Errors
//!
//! Failures of the store collaborator itself. A missing record is not an error at
//! this layer: lookups return `Option`, and callers decide what absence means.

/// Errors that can occur while talking to a record store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(&'static str),
}
