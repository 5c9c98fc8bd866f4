//! # HTTP Layer
//!
//! Exposes the Dish and Order clients as a JSON API under `/dishes` and `/orders`.
//!
//! Request and response bodies use the `{ "data": ... }` envelope; failures are
//! `{ "error": "<message>" }` with 400, 404, 405 or 500.

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::router;

use crate::clients::{DishClient, OrderClient};
use crate::lifecycle::RestaurantSystem;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub dishes: DishClient,
    pub orders: OrderClient,
}

impl AppState {
    pub fn new(system: &RestaurantSystem) -> Self {
        Self {
            dishes: system.dish_client.clone(),
            orders: system.order_client.clone(),
        }
    }
}
