//! # System Lifecycle
//!
//! Starts, wires and stops the actors behind the restaurant API.
//!
//! ## Startup
//!
//! [`RestaurantSystem::new`] creates the Dish and Order actors from a [`Config`], spawns each
//! on its own Tokio task and keeps their clients. Both actors draw identifiers from one
//! [`IdSource`](actor_framework::IdSource), so a dish and an order never share an id.
//!
//! Neither actor depends on the other (`Context = ()` for both).
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - Finish the current request, log final state
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! Clones of the clients held elsewhere (the HTTP router state) keep the channels open, so
//! they must be dropped first. The binary does this by letting `axum::serve` return before
//! calling [`RestaurantSystem::shutdown`].

use crate::clients::{DishClient, OrderClient};
use crate::config::Config;
use crate::{dish_actor, order_actor};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// The running actors and the clients that reach them.
pub struct RestaurantSystem {
    pub dish_client: DishClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawns both actors. Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let ids = config.ids();
        let (dish_actor, dish_client) = dish_actor::new(config.channel_capacity, ids.clone());
        let (order_actor, order_client) = order_actor::new(config.channel_capacity, ids);

        let dish_handle = tokio::spawn(dish_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        info!(
            id_strategy = ?config.id_strategy,
            channel_capacity = config.channel_capacity,
            "Restaurant system started"
        );

        Self {
            dish_client,
            order_client,
            handles: vec![dish_handle, order_handle],
        }
    }

    /// Drops the clients and waits for every actor to drain and exit.
    ///
    /// Returns the first failure if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
