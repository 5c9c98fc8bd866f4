//! # Order Actor
//!
//! Owns the collection of [`Order`] records and enforces the order business rules.
//!
//! ## Overview
//!
//! - Status defaults to `pending` on create.
//! - Any status may follow any other, except that `delivered` is absorbing.
//! - Only `pending` orders may be deleted.
//!
//! Orders reference dishes by id only. The Order actor has no dependency on the Dish actor
//! (`Context = ()`), so a `dishId` is not checked against the menu.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`validation`] - create and update pipelines
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::{ResourceActor, SharedIds};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize, ids: SharedIds) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ids);
    (actor, OrderClient::new(generic_client))
}
