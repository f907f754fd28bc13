//! Snapshot persistence: the JSON codec and the load policies.

pub mod codec;

pub use codec::*;

use std::fmt::Display;
use std::str::FromStr;

/// How a loaded snapshot is applied to an inventory that already holds products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Drop everything currently stored, then insert the snapshot.
    #[default]
    Replace,
    /// Upsert every snapshot record by id. Products absent from the snapshot are kept.
    Merge,
}

impl Display for LoadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadMode::Replace => f.write_str("replace"),
            LoadMode::Merge => f.write_str("merge"),
        }
    }
}

impl FromStr for LoadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(LoadMode::Replace),
            "merge" => Ok(LoadMode::Merge),
            other => Err(format!("Unknown load mode: {other:?} (expected replace or merge)")),
        }
    }
}
