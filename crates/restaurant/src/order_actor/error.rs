//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A required text field is missing or empty.
    #[error("Order must include a {0}")]
    MissingField(&'static str),

    /// `dishes` is missing, empty, or not an array.
    #[error("Order must include at least one dish")]
    MissingDishes,

    /// The dish line at this index has no positive integer quantity.
    #[error("Dish {0} must have a quantity that is an integer greater than 0")]
    InvalidQuantity(usize),

    /// The body carries an identifier different from the one in the route.
    #[error("Order id does not match route id. Order: {body}, Route: {route}.")]
    IdMismatch { body: String, route: String },

    /// The status is missing or not one of the known values.
    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    /// The stored order is delivered and can no longer change.
    #[error("A delivered order cannot be changed")]
    Delivered,

    /// Only pending orders may be deleted.
    #[error("An order cannot be deleted unless it is pending")]
    NotPending,

    /// The requested order was not found.
    #[error("Order does not exist: {0}.")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Whether the caller's input caused this error (as opposed to the actor system).
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            OrderError::NotFound(_) | OrderError::ActorCommunicationError(_)
        )
    }
}
