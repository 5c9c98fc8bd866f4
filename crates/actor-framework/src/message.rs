//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to the operations a collection-backed resource supports:
///
/// - **List**: Retrieval of every stored record, in insertion order.
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to build and append a record.
/// - **Get (Read)**: Fetches the current state of one record by ID.
/// - **Update**: Replaces the mutable state of an existing record with [`ActorEntity::Update`].
/// - **Delete**: Lifecycle end. Removes the record, subject to [`ActorEntity::on_delete`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
