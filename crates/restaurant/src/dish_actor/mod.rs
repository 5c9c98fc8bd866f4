//! # Dish Actor
//!
//! Owns the menu: the collection of [`Dish`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Dish`]
//! - [`error`] - [`DishError`] type for type-safe error handling
//! - [`validation`] - create and update pipelines
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::SequentialIds;
//! use restaurant::dish_actor;
//! use restaurant::model::DishDraft;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = dish_actor::new(32, Arc::new(SequentialIds::new()));
//!     tokio::spawn(actor.run(()));
//!
//!     let draft: DishDraft = serde_json::from_value(serde_json::json!({
//!         "name": "Taco", "description": "Spicy", "price": 5, "image_url": "http://x"
//!     }))?;
//!     let dish = client.create_dish(draft).await?;
//!     assert_eq!(dish.id.0, "1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;

use crate::clients::DishClient;
use crate::model::Dish;
use actor_framework::{ResourceActor, SharedIds};

/// Creates a new Dish actor and its client.
pub fn new(buffer_size: usize, ids: SharedIds) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ids);
    (actor, DishClient::new(generic_client))
}
