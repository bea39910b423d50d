//! Error types for the Order actor.

use crate::cart::CartError;
use crate::pricing::PricingError;
use shop_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// An order needs at least one cart line.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// A customer field that must be filled in is blank.
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// The requested pickup time is not one of the offered choices.
    #[error("Pickup time of {0} minutes is not offered")]
    InvalidPickupTime(u32),

    /// A submitted cart line is inconsistent with itself or the menu.
    #[error("Invalid cart line: {0}")]
    InvalidLine(#[from] CartError),

    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other @ FrameworkError::EntityError(_) => other
                .downcast_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunication(e.to_string())),
            other => OrderError::ActorCommunication(other.to_string()),
        }
    }
}
