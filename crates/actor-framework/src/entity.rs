//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Dish, Order, …) must
//! implement to be managed by the generic `ResourceActor`. It specifies associated types for
//! IDs, payloads, context and errors, and provides the lifecycle hooks (`on_create`,
//! `on_update`, `on_delete`).
//!
//! # Architecture Note
//! By defining one contract that all resource types satisfy, the `ResourceActor` logic is
//! written *once* and reused for every collection.
//!
//! Associated types keep the payloads apart: a `Dish` actor only accepts dish submissions,
//! and the compiler rejects an order submission sent to it.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Implement them to add validation that needs the stored record.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await other actors. The `Context` type is
/// injected into every hook at `run()` time ("late binding" of dependencies).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Built from the string produced by the actor's [`IdSource`](crate::IdSource).
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<String>;

    /// The raw payload submitted to create an instance.
    type Create: Send + Sync + Debug;

    /// The raw payload submitted to replace an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per actor rather than one per operation. Clients deal with a single
    /// `DishError` or `OrderError`, and the framework boxes it into
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) so the client can
    /// downcast it back.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the freshly issued ID and the payload.
    /// Validation of the payload happens here; an `Err` leaves the store untouched.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request reaches an existing entity.
    /// The entity must leave itself unchanged when it returns `Err`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. An `Err` vetoes the removal.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
