//! # Store Client
//!
//! The typed handle callers use to talk to a `StoreActor`.

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use tokio::sync::{mpsc, oneshot};

/// ## StoreClient
///
/// Forwards requests over a Tokio mpsc channel and awaits the answer on a
/// oneshot channel. It holds only a sender, so cloning is cheap and clones can
/// be shared across tasks. The actor stops once every clone is dropped.
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Record> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindById { id, respond_to })
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<T>, StoreError> {
        let name = name.to_string();
        self.request(|respond_to| StoreRequest::FindByName { name, respond_to })
            .await
    }

    pub async fn save(&self, record: T) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Save { record, respond_to })
            .await
    }

    pub async fn delete_by_id(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::DeleteById { id, respond_to })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindAll { respond_to })
            .await
    }
}
