//! Type-safe async handle to an [`InventoryActor`](crate::actor::InventoryActor).

pub mod error;
pub mod inventory_client;

pub use error::*;
pub use inventory_client::*;
