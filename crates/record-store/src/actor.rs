//! # Store Actor
//!
//! This module defines the `StoreActor`, the server side of the store. It owns the
//! record table and processes requests one at a time, so no lock guards the table.

use crate::client::StoreClient;
use crate::message::StoreRequest;
use crate::record::Record;
use crate::table::{RecordTable, Saved};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a table of records.
///
/// # Concurrency Model
/// The actor processes its messages *sequentially* in a loop. Each individual
/// request (one save, one delete) is therefore atomic with respect to every other
/// request. A read followed by a save issued by a caller is *not*: another request
/// may be handled in between.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Stop**: Drop every client; the loop ends when the channel closes.
///
/// ```rust
/// use record_store::{Record, StoreActor};
///
/// #[derive(Clone, Debug)]
/// struct Keg { id: Option<u64>, name: String }
///
/// impl Record for Keg {
///     type Id = u64;
///     fn id(&self) -> Option<&u64> { self.id.as_ref() }
///     fn set_id(&mut self, id: u64) { self.id = Some(id); }
///     fn name(&self) -> &str { &self.name }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Keg>::new(10);
///     let handle = tokio::spawn(actor.run());
///
///     let saved = client.save(Keg { id: None, name: "pilsner".into() }).await.unwrap();
///     assert_eq!(saved.id, Some(1));
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    table: RecordTable<T>,
}

impl<T: Record> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            table: RecordTable::new(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Just the type name ("Beer" instead of "beer_stock::model::beer::Beer")
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::FindById { id, respond_to } => {
                    let record = self.table.find_by_id(&id);
                    debug!(record_type, %id, found = record.is_some(), "FindById");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::FindByName { name, respond_to } => {
                    let record = self.table.find_by_name(&name);
                    debug!(record_type, %name, found = record.is_some(), "FindByName");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Save { record, respond_to } => {
                    debug!(record_type, ?record, "Save");
                    let (saved, outcome) = self.table.save(record);
                    if let Some(id) = saved.id() {
                        match outcome {
                            Saved::Inserted => {
                                info!(record_type, %id, size = self.table.len(), "Inserted")
                            }
                            Saved::Replaced => info!(record_type, %id, "Replaced"),
                        }
                    }
                    let _ = respond_to.send(Ok(saved));
                }
                StoreRequest::DeleteById { id, respond_to } => {
                    debug!(record_type, %id, "DeleteById");
                    if self.table.delete_by_id(&id) {
                        info!(record_type, %id, size = self.table.len(), "Deleted");
                    } else {
                        warn!(record_type, %id, "Delete of absent record");
                    }
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::FindAll { respond_to } => {
                    let records = self.table.find_all();
                    debug!(record_type, count = records.len(), "FindAll");
                    let _ = respond_to.send(Ok(records));
                }
            }
        }

        info!(record_type, size = self.table.len(), "Shutdown");
    }
}
