//! Runtime configuration for [`InventorySystem`](super::InventorySystem).

use std::path::PathBuf;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "inventory.json";

/// Default capacity of the actor's request channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Snapshot file read at start and written at shutdown.
    pub snapshot_path: PathBuf,
    /// Bound of the actor's request queue.
    pub channel_capacity: usize,
    /// Replace the empty inventory with the snapshot if the file exists.
    pub load_on_start: bool,
    /// Write the snapshot when the system shuts down.
    pub save_on_shutdown: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            load_on_start: true,
            save_on_shutdown: true,
        }
    }
}

impl InventoryConfig {
    /// Default settings with a custom snapshot path.
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            ..Self::default()
        }
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    pub fn with_load_on_start(mut self, enabled: bool) -> Self {
        self.load_on_start = enabled;
        self
    }

    pub fn with_save_on_shutdown(mut self, enabled: bool) -> Self {
        self.save_on_shutdown = enabled;
        self
    }
}
