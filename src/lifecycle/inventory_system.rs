use super::InventoryConfig;
use crate::actor::InventoryActor;
use crate::clients::{ClientError, InventoryClient};
use crate::inventory::Inventory;
use crate::persistence::LoadMode;
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors raised while stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    /// The final snapshot could not be written.
    #[error("Shutdown save failed: {0}")]
    Client(#[from] ClientError),

    /// The actor task panicked or was cancelled.
    #[error("Actor task failed: {0}")]
    Join(String),
}

/// The runtime orchestrator for a shared inventory.
///
/// `InventorySystem` is responsible for:
/// - **Startup**: restoring the snapshot file (when configured) and spawning the actor
/// - **Access**: handing out the [`InventoryClient`]
/// - **Shutdown**: writing the snapshot (when configured) and waiting for the actor to exit
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::start(InventoryConfig::new("inventory.json"));
///
/// system.client.add(Product::new("A1", "Red Pen", 5, 1.5)?, false).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for interacting with the inventory actor
    pub client: InventoryClient,

    config: InventoryConfig,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Creates the inventory and spawns its actor. Must be called inside a Tokio runtime.
    ///
    /// If `load_on_start` is set and the snapshot file exists, it is loaded with
    /// [`LoadMode::Replace`]. A snapshot that cannot be loaded is logged and
    /// skipped: the system starts empty and the file is left untouched.
    pub fn start(config: InventoryConfig) -> Self {
        let inventory = restore(&config);
        let (actor, client) = InventoryActor::new(config.channel_capacity.max(1), inventory);
        let handle = tokio::spawn(actor.run());

        Self {
            client,
            config,
            handle,
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Gracefully shuts down the system.
    ///
    /// 1. Saves the snapshot through the actor if `save_on_shutdown` is set
    /// 2. Drops the client, which closes the channel once no other clones remain
    /// 3. Waits for the actor task to complete
    ///
    /// The actor is stopped even when the save fails; the save error is returned afterwards.
    ///
    /// This does not return until every [`InventoryClient`] clone has been dropped:
    /// the actor keeps serving while any sender is alive, so drop your clones
    /// before awaiting `shutdown`.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down inventory system...");

        let saved = if self.config.save_on_shutdown {
            self.client.save(self.config.snapshot_path.clone()).await
        } else {
            Ok(())
        };

        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::Join(e.to_string()));
        }

        saved?;
        info!("System shutdown complete.");
        Ok(())
    }
}

fn restore(config: &InventoryConfig) -> Inventory {
    let mut inventory = Inventory::new();
    let path = &config.snapshot_path;

    if !config.load_on_start || !path.exists() {
        return inventory;
    }

    match inventory.load(path, LoadMode::Replace) {
        Ok(records) => info!(path = %path.display(), records, "Snapshot restored"),
        Err(e) => warn!(path = %path.display(), error = %e, "Snapshot not loaded, starting empty"),
    }
    inventory
}
