//! # Actor Framework
//!
//! Building blocks for resource collections that live inside Tokio actors. Each resource type
//! gets one [`ResourceActor`] that owns its records, and any number of cheap
//! [`ResourceClient`] handles that talk to it over channels.
//!
//! ## Why an actor per collection?
//!
//! - **Isolated state**: the actor is the sole owner of its records; callers receive clones.
//! - **Sequential processing**: a request's existence check, validation and mutation happen
//!   without interleaving with other requests, so no locks guard the store.
//! - **A single seam**: the actor is the only place that touches the collection, which is where
//!   real persistence would plug in.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its payloads and lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe async calls
//!
//! Validation lives in the entity hooks and is expressed with [`pipeline::Pipeline`], an
//! ordered list of steps where the first failure wins.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time, so
//! actors can be created first and wired afterwards. Entities without dependencies use `()`.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers client requests from canned expectations without spawning an
//! actor. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;
pub mod pipeline;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use ids::{IdSource, RandomIds, SequentialIds, SharedIds};
pub use message::{ResourceRequest, Response};
pub use pipeline::{Pipeline, Step};
