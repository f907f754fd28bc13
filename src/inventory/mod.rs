//! The product repository: primary id store plus the derived name index.
//!
//! [`Inventory`] is plain single-threaded state. To share one between tasks,
//! hand it to an [`InventoryActor`](crate::actor::InventoryActor), which owns it
//! exclusively and applies requests one at a time.

pub mod error;
pub mod index;

pub use error::*;
pub use index::NameIndex;

use crate::model::{normalize_name, Product};
use crate::persistence::{self, LoadMode};
use std::collections::HashMap;
use std::path::Path;

/// In-memory catalog of products keyed by id, with a secondary index by name.
///
/// Invariant: every stored product's id sits in the index bucket for its
/// normalized name, in no other bucket, and no bucket is empty.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    items: HashMap<String, Product>,
    by_name: NameIndex,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Adds a product.
    ///
    /// # Errors
    /// `DuplicateId` if the id is already stored and `overwrite` is false; the
    /// stored product is left as it was.
    pub fn add(&mut self, product: Product, overwrite: bool) -> Result<(), InventoryError> {
        if let Some(existing) = self.items.get(product.id()) {
            if !overwrite {
                return Err(InventoryError::DuplicateId {
                    id: product.id().to_string(),
                });
            }
            self.by_name.remove(existing.name(), existing.id());
        }
        self.by_name.insert(product.name(), product.id());
        self.items.insert(product.id().to_string(), product);
        Ok(())
    }

    /// Removes and returns the product stored under `id`.
    pub fn remove(&mut self, id: &str) -> Result<Product, InventoryError> {
        let product = self
            .items
            .remove(id)
            .ok_or_else(|| InventoryError::not_found(id))?;
        self.by_name.remove(product.name(), product.id());
        Ok(product)
    }

    pub fn get_by_id(&self, id: &str) -> Result<&Product, InventoryError> {
        self.items.get(id).ok_or_else(|| InventoryError::not_found(id))
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<Product, InventoryError> {
        let updated = self.get_by_id(id)?.with_quantity(quantity)?;
        // name unchanged, index untouched
        self.items.insert(id.to_string(), updated.clone());
        Ok(updated)
    }

    pub fn update_price(&mut self, id: &str, price: f64) -> Result<Product, InventoryError> {
        let updated = self.get_by_id(id)?.with_price(price)?;
        self.items.insert(id.to_string(), updated.clone());
        Ok(updated)
    }

    /// Renames a product and moves its id to the matching index bucket.
    pub fn update_name(&mut self, id: &str, name: &str) -> Result<Product, InventoryError> {
        let current = self.items.get(id).ok_or_else(|| InventoryError::not_found(id))?;
        let updated = current.with_name(name)?;
        self.by_name.remove(current.name(), id);
        self.by_name.insert(updated.name(), id);
        self.items.insert(id.to_string(), updated.clone());
        Ok(updated)
    }

    /// Finds products by name, ignoring case and surrounding whitespace.
    ///
    /// With `exact`, only products whose normalized name equals the normalized
    /// query match (a single index lookup). Otherwise every product whose
    /// normalized name contains the query matches. Results are ordered by
    /// normalized name, then id.
    pub fn search_by_name(&self, query: &str, exact: bool) -> Vec<Product> {
        let query = normalize_name(query);
        let mut results: Vec<Product> = if exact {
            self.by_name
                .bucket(&query)
                .into_iter()
                .flatten()
                .filter_map(|id| self.items.get(id))
                .cloned()
                .collect()
        } else {
            self.by_name
                .iter()
                .filter(|(key, _)| key.contains(query.as_str()))
                .flat_map(|(_, ids)| ids.iter())
                .filter_map(|id| self.items.get(id))
                .cloned()
                .collect()
        };
        sort_for_display(&mut results);
        results
    }

    /// Every product, ordered by normalized name, then id.
    pub fn list_all(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.items.values().cloned().collect();
        sort_for_display(&mut products);
        products
    }

    /// Serializes the inventory, in [`list_all`](Self::list_all) order.
    pub fn to_json(&self) -> Result<String, InventoryError> {
        persistence::encode(&self.list_all())
    }

    /// Applies a snapshot document and returns how many records it held.
    ///
    /// The whole document is decoded and validated before anything is changed,
    /// so on error the inventory is exactly as it was, whatever the mode.
    pub fn load_json(&mut self, text: &str, mode: LoadMode) -> Result<usize, InventoryError> {
        let products = persistence::decode(text)?;
        let count = products.len();
        if mode == LoadMode::Replace {
            self.items.clear();
            self.by_name.clear();
        }
        for product in products {
            self.add(product, true)?;
        }
        Ok(count)
    }

    /// Writes a snapshot to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), InventoryError> {
        let path = path.as_ref();
        let text = self.to_json()?;
        std::fs::write(path, text).map_err(|source| InventoryError::Io {
            operation: IoOperation::Write,
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads a snapshot from `path` and applies it with `mode`.
    pub fn load(&mut self, path: impl AsRef<Path>, mode: LoadMode) -> Result<usize, InventoryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
            operation: IoOperation::Read,
            path: path.to_path_buf(),
            source,
        })?;
        self.load_json(&text, mode)
    }
}

fn sort_for_display(products: &mut [Product]) {
    products.sort_by_cached_key(|p| (p.normalized_name(), p.id().to_string()));
}
