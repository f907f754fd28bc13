#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Inventory Recipe
//!
//! > **A product inventory with a name index, JSON snapshots and an actor front door.**
//!
//! The crate keeps a catalog of products keyed by id, plus a secondary index from
//! normalized name to ids so that name lookups do not scan the whole catalog.
//! The catalog can be written to and restored from a JSON snapshot, either replacing
//! what is in memory or merging into it.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Plain state at the core
//! [`Inventory`](inventory::Inventory) is ordinary single-threaded Rust: `&mut self`
//! methods that return `Result`. It never logs and never touches global state, so it is
//! trivial to test and to embed.
//!
//! ### An actor when sharing is needed
//! The name index is only correct if every mutation runs start-to-finish on its own.
//! Instead of wrapping the inventory in a lock, [`InventoryActor`](actor::InventoryActor)
//! owns it inside a Tokio task and processes requests one at a time, while any number of
//! cloned [`InventoryClient`](clients::InventoryClient)s send work to it.
//!
//! ### Values, not mutation
//! [`Product`](model::Product) is immutable. Updating a quantity, price or name produces
//! a new validated value; the inventory decides which value is current for an id.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer has its own error enum: [`InvalidProduct`](model::InvalidProduct),
//! [`InventoryError`](inventory::InventoryError), [`ClientError`](clients::ClientError)
//! and [`SystemError`](lifecycle::SystemError). The `#[from]` attribute provides the
//! conversions between them.
//!
//! ### 2. Fail-fast snapshots
//! A snapshot is fully decoded and validated before the inventory changes, so a bad
//! file never leaves a half-replaced or half-merged catalog behind.
//!
//! ### 3. Observability
//! `tracing` is used in the actor, client and lifecycle layers with structured fields.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: the [`Product`](model::Product) value and its validation.
//! - [`inventory`]: the repository and its [`NameIndex`](inventory::NameIndex).
//! - [`persistence`]: the JSON codec and [`LoadMode`](persistence::LoadMode).
//! - [`actor`]: the sequential request loop, messages and mock helpers.
//! - [`clients`]: the async [`InventoryClient`](clients::InventoryClient).
//! - [`lifecycle`]: [`InventorySystem`](lifecycle::InventorySystem), configuration and tracing setup.
//! - [`report`]: text tables for presenting products.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use inventory_recipe::inventory::Inventory;
//! use inventory_recipe::model::Product;
//!
//! let mut inventory = Inventory::new();
//! inventory.add(Product::new("P1", "Red Pen", 10, 1.0).unwrap(), false).unwrap();
//! inventory.add(Product::new("P2", "Blue Pen", 7, 1.2).unwrap(), false).unwrap();
//!
//! let pens = inventory.search_by_name("pen", false);
//! assert_eq!(pens.len(), 2);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- /tmp/inventory.json
//! ```

pub mod actor;
pub mod clients;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod persistence;
pub mod report;
