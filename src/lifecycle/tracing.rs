//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact format hides the
//! crate/module prefix (`with_target(false)`); every line carries an `op` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown with the inventory size
//! - **Mutations**: `Add`, `Remove`, `Update*` at `info` with the product id and new size
//! - **Snapshots**: `Save`/`Load` with path, mode and record count
//! - **Failures**: rejected operations at `warn` with the error
//!
//! The [`Inventory`](crate::inventory::Inventory) itself never logs; only the actor,
//! the client and the lifecycle layer do.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show request payloads and client spans
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started size=0
//! INFO Ok op="Add" id=P1 size=1
//! WARN Failed op="Add" id=P1 error=Product already exists: P1
//! INFO Saved op="Save" path=inventory.json size=3
//! INFO Shutdown size=3
//! ```

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the op field says what happened
        .compact()
        .init();
}
