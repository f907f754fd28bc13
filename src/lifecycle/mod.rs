//! # System Lifecycle
//!
//! Starting, wiring and stopping the inventory actor.
//!
//! - [`InventoryConfig`] - where the snapshot lives and what happens to it at start/stop
//! - [`InventorySystem`] - loads the snapshot, spawns the actor, saves on shutdown
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure
//!
//! ```rust,ignore
//! let system = InventorySystem::start(InventoryConfig::new("inventory.json"));
//! system.client.add(product, false).await?;
//! system.shutdown().await?; // saves inventory.json, then stops the actor
//! ```

pub mod config;
pub mod inventory_system;
pub mod tracing;

pub use config::*;
pub use inventory_system::*;
pub use self::tracing::*;
