//! Error types for the Inventory client.

use crate::inventory::InventoryError;
use thiserror::Error;

/// Errors returned by [`InventoryClient`](super::InventoryClient) calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The inventory rejected the operation.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The request could not be delivered because the actor has stopped.
    #[error("Actor closed")]
    ActorClosed,

    /// The actor dropped the request without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
}

impl ClientError {
    /// The inventory error behind this failure, if the actor answered at all.
    pub fn inventory(&self) -> Option<&InventoryError> {
        match self {
            ClientError::Inventory(e) => Some(e),
            _ => None,
        }
    }
}
