//! Error types for the Dish actor.

use thiserror::Error;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    /// A required text field is missing or empty.
    #[error("Dish must include a {0}")]
    MissingField(&'static str),

    /// The price is missing, not an integer, or not greater than zero.
    #[error("Dish must have a price that is an integer greater than 0")]
    InvalidPrice,

    /// The body carries an identifier different from the one in the route.
    #[error("Dish id does not match route id. Dish: {body}, Route: {route}")]
    IdMismatch { body: String, route: String },

    /// The requested dish was not found.
    #[error("Dish does not exist: {0}.")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DishError {
    /// Whether the caller's input caused this error (as opposed to the actor system).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DishError::MissingField(_) | DishError::InvalidPrice | DishError::IdMismatch { .. }
        )
    }
}
