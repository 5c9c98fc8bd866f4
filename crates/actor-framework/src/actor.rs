//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the repository that owns one resource collection.
//! It implements the "Server" side of the Actor Model, processing messages sequentially and
//! ensuring exclusive access to the records it stores.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::ids::SharedIds;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the records (`store`) and the
/// receiver end of the channel. Handlers only ever see clones.
///
/// **Concurrency Model**:
/// Each actor processes its messages *sequentially*. The existence check, the entity hooks
/// and the mutation of one request therefore happen without interleaving with any other
/// request, and no `Mutex` is needed around the store.
///
/// # Usage Pattern
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor, SequentialIds};
/// use async_trait::async_trait;
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug)] struct Note { id: String, text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = String;
///     type Create = String;
///     type Update = String;
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, text: String) -> Result<Self, NoteError> {
///         Ok(Self { id, text })
///     }
///     async fn on_update(&mut self, text: String, _: &()) -> Result<(), NoteError> {
///         self.text = text;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     // 1. Create
///     let (actor, client) = ResourceActor::<Note>::new(10, Arc::new(SequentialIds::new()));
///
///     // 2. Wire & Run
///     tokio::spawn(actor.run(()));
///
///     // 3. Use
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(note.id, "1");
/// }
/// ```
///
/// # Operations
///
/// * **List**: clones of every record, in insertion order.
/// * **Create**: draws an ID from the `IdSource`, calls `T::from_create_params`, then
///   `on_create`, then appends. Any `Err` leaves the store untouched.
/// * **Get**: a clone of the record, or `None`.
/// * **Update**: `NotFound` if absent, otherwise `on_update` mutates the record in place.
/// * **Delete**: `NotFound` if absent, otherwise `on_delete` may veto; then removes.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    ids: SharedIds,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `ids` - Source of identifiers for created records.
    pub fn new(buffer_size: usize, ids: SharedIds) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            ids,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Dish" instead of "restaurant::model::dish::Dish"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.ids.next_id());

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.push(item.clone());
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.store[index].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let item = &mut self.store[index];
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item.clone()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = self.store[index].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(index);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
