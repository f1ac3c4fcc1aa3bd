//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered
//! from a queue of expectations instead of a table. Use it when a test must
//! prove *which* store calls a service makes, not only what it returns.
//!
//! ## When to use which collaborator
//!
//! | Collaborator | State | Use Case |
//! |---|---|---|
//! | [`MockStore`] | None (canned answers) | Asserting the exact calls a service issues |
//! | [`InMemoryRepository`](crate::InMemoryRepository) | Real table, no task | Fast behavioural tests of a service |
//! | [`StoreActor`](crate::StoreActor) | Real table, own task | Full system and concurrency tests |
//!
//! ## Example
//!
//! ```rust
//! use record_store::mock::MockStore;
//! use record_store::{Record, StoreError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Keg { id: Option<u64>, name: String }
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
//!     let mut mock = MockStore::<Keg>::new();
//!     mock.expect_find_by_name("porter").return_ok(None);
//!     mock.expect_find_all().return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.find_by_name("porter").await.unwrap().is_none());
//!     assert!(matches!(client.find_all().await, Err(StoreError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! An unexpected call (wrong operation, wrong id or name, or no expectation
//! left) is not answered: the caller sees [`StoreError::ActorDropped`] and the
//! mismatch is recorded so that [`MockStore::verify`] fails.
//!
//! ## Low-level helpers
//!
//! [`create_mock_client`] returns a client plus the raw receiver, and the
//! `expect_*` free functions pull the next request off that receiver so a test
//! can inspect its payload and answer it by hand.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the answer to give it.
enum Expectation<T: Record> {
    FindById {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    FindByName {
        name: String,
        response: Result<Option<T>, StoreError>,
    },
    Save {
        response: Result<T, StoreError>,
    },
    DeleteById {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    FindAll {
        response: Result<Vec<T>, StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking for fluent testing.
pub struct MockStore<T: Record> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    saved: Arc<Mutex<Vec<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockStore<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let saved = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let failures = mismatches.clone();
        let saved_log = saved.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                answer(request, expectation, &saved_log, &failures);
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            mismatches,
            saved,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_find_by_id(&mut self, id: T::Id) -> FindByIdExpectation<T> {
        FindByIdExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_find_by_name(&mut self, name: impl Into<String>) -> FindByNameExpectation<T> {
        FindByNameExpectation {
            name: name.into(),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_save(&mut self) -> SaveExpectation<T> {
        SaveExpectation {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_delete_by_id(&mut self, id: T::Id) -> DeleteByIdExpectation<T> {
        DeleteByIdExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_find_all(&mut self) -> FindAllExpectation<T> {
        FindAllExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Records passed to `save`, in call order.
    pub fn saved(&self) -> Vec<T> {
        self.saved.lock().unwrap().clone()
    }

    /// Panics if an expectation was not consumed or a request did not match.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected store requests: {:?}", *mismatches);
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Answers `request` from `expectation`. A mismatch is recorded before the
/// request (and its responder) is dropped, so the caller never observes the
/// failure ahead of `verify`.
fn answer<T: Record>(
    request: StoreRequest<T>,
    expectation: Option<Expectation<T>>,
    saved: &Mutex<Vec<T>>,
    mismatches: &Mutex<Vec<String>>,
) {
    match (request, expectation) {
        (
            StoreRequest::FindById { id, respond_to },
            Some(Expectation::FindById {
                id: expected,
                response,
            }),
        ) if id == expected => {
            let _ = respond_to.send(response);
        }
        (
            StoreRequest::FindByName { name, respond_to },
            Some(Expectation::FindByName {
                name: expected,
                response,
            }),
        ) if name == expected => {
            let _ = respond_to.send(response);
        }
        (StoreRequest::Save { record, respond_to }, Some(Expectation::Save { response })) => {
            saved.lock().unwrap().push(record);
            let _ = respond_to.send(response);
        }
        (
            StoreRequest::DeleteById { id, respond_to },
            Some(Expectation::DeleteById {
                id: expected,
                response,
            }),
        ) if id == expected => {
            let _ = respond_to.send(response);
        }
        (StoreRequest::FindAll { respond_to }, Some(Expectation::FindAll { response })) => {
            let _ = respond_to.send(response);
        }
        (request, _) => {
            mismatches.lock().unwrap().push(format!("{:?}", request));
        }
    }
}

pub struct FindByIdExpectation<T: Record> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: Record> FindByIdExpectation<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::FindById {
                id: self.id,
                response,
            });
    }
}

pub struct DeleteByIdExpectation<T: Record> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: Record> DeleteByIdExpectation<T> {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::DeleteById {
                id: self.id,
                response,
            });
    }
}

pub struct FindByNameExpectation<T: Record> {
    name: String,
    expectations: Queue<T>,
}

impl<T: Record> FindByNameExpectation<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::FindByName {
                name: self.name,
                response,
            });
    }
}

pub struct SaveExpectation<T: Record> {
    expectations: Queue<T>,
}

impl<T: Record> SaveExpectation<T> {
    pub fn return_ok(self, record: T) {
        self.push(Ok(record));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Save { response });
    }
}

pub struct FindAllExpectation<T: Record> {
    expectations: Queue<T>,
}

impl<T: Record> FindAllExpectation<T> {
    pub fn return_ok(self, records: Vec<T>) {
        self.push(Ok(records));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<T>, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::FindAll { response });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: pull requests with the `expect_*` helpers below,
/// assert on their payload, and answer through the returned responder.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Next message must be a `FindById` request.
pub async fn expect_find_by_id<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be a `FindByName` request.
pub async fn expect_find_by_name<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(String, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindByName { name, respond_to }) => Some((name, respond_to)),
        _ => None,
    }
}

/// Next message must be a `Save` request.
pub async fn expect_save<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Next message must be a `DeleteById` request.
pub async fn expect_delete_by_id<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::DeleteById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
