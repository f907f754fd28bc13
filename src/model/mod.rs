//! Pure value types held by the [`Inventory`](crate::inventory::Inventory).

pub mod product;

pub use product::*;
