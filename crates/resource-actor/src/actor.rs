//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the authoritative owner of the
//! ordered in-memory collection for a resource type. It implements the
//! "Server" side of the Actor Model, processing messages sequentially and
//! ensuring exclusive access to the collection.

use crate::client::StoreClient;
use crate::entity::Resource;
use crate::error::StoreError;
use crate::message::StoreRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns the ordered collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state
/// (`records`, `next_id`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so the
/// read-modify-write sequence "compute next id, then append" is a single
/// critical section without any `Mutex`. Two concurrent creates can never
/// receive the same id, and no request ever observes a partially-applied
/// mutation.
///
/// # Identifier Assignment
/// `next_id` starts at 1 and increments on every create, never decrements.
/// Deleting a record does not renumber the rest and a deleted id is never
/// handed out again.
///
/// # Ordering
/// Records live in a `Vec` in insertion order; `List` slices that order and
/// `Get`/`Replace`/`Delete` perform a linear scan by id.
///
/// ```rust
/// use resource_actor::{Resource, StoreActor};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Note { id: u64, body: String }
///
/// #[derive(Debug)]
/// struct NoteFields { body: String }
///
/// impl Resource for Note {
///     type Id = u64;
///     type Fields = NoteFields;
///
///     fn from_fields(id: u64, fields: NoteFields) -> Self {
///         Self { id, body: fields.body }
///     }
///     fn replace(&mut self, fields: NoteFields) {
///         self.body = fields.body;
///     }
///     fn id(&self) -> &u64 {
///         &self.id
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let note = client.create(NoteFields { body: "hi".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
///     let listed = client.list(0, 10).await.unwrap();
///     assert_eq!(listed, vec![note]);
/// }
/// ```
pub struct StoreActor<T: Resource> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: Vec<T>,
    next_id: u64,
}

impl<T: Resource> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls on the client will wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `StoreActor` instance (the server), which must be run via `.run()`.
    /// 2. The `StoreClient` instance, which can be cloned and shared to send requests.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Vec::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes (i.e. every client has been dropped).
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Todo" instead of "todo_api::model::todo::Todo")
        let resource_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(resource_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { fields, respond_to } => {
                    debug!(resource_type, ?fields, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let record = T::from_fields(id.clone(), fields);
                    self.records.push(record.clone());
                    info!(resource_type, %id, size = self.records.len(), "Created");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::List {
                    offset,
                    limit,
                    respond_to,
                } => {
                    let page: Vec<T> = self
                        .records
                        .iter()
                        .skip(offset)
                        .take(limit)
                        .cloned()
                        .collect();
                    debug!(resource_type, offset, limit, returned = page.len(), "List");
                    let _ = respond_to.send(Ok(page));
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.records.iter().find(|r| r.id() == &id).cloned();
                    let found = record.is_some();
                    debug!(resource_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Replace {
                    id,
                    fields,
                    respond_to,
                } => {
                    debug!(resource_type, %id, ?fields, "Replace");
                    if let Some(record) = self.records.iter_mut().find(|r| r.id() == &id) {
                        record.replace(fields);
                        info!(resource_type, %id, "Replaced");
                        let _ = respond_to.send(Ok(record.clone()));
                    } else {
                        warn!(resource_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(resource_type, %id, "Delete");
                    if let Some(index) = self.records.iter().position(|r| r.id() == &id) {
                        self.records.remove(index);
                        info!(resource_type, %id, size = self.records.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(resource_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(resource_type, size = self.records.len(), "Shutdown");
    }
}
