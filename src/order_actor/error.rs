//! Error types for the Order actor.

use crate::model::MenuItemId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found")]
    NotFound,

    /// An order line references a dish that is not on the menu.
    #[error("Menu item with ID {0} not found")]
    UnknownMenuItem(MenuItemId),

    /// The requested status is not one of the known statuses.
    #[error("Invalid status. Must be one of: pending, preparing, ready, delivered, cancelled")]
    InvalidStatus,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
