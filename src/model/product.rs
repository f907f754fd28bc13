//! Product value type and its validation.
//!
//! # Immutability
//! A `Product` never changes after construction. The `with_*` methods return a
//! fresh, re-validated value carrying the same id, which leaves the
//! [`Inventory`](crate::inventory::Inventory) as the single owner of which value
//! is current for a given id.
use std::fmt::Display;
use thiserror::Error;

/// The product field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Name,
    Quantity,
    Price,
}

impl Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProductField::Id => "id",
            ProductField::Name => "name",
            ProductField::Quantity => "quantity",
            ProductField::Price => "price",
        };
        f.write_str(name)
    }
}

/// A product could not be constructed from the given values.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid product {field}: {reason}")]
pub struct InvalidProduct {
    pub field: ProductField,
    pub reason: &'static str,
}

impl InvalidProduct {
    fn new(field: ProductField, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// Represents a product in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    quantity: i64,
    price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, must not be empty
    /// * `name` - Display name, must not be empty
    /// * `quantity` - Units in stock, must be `>= 0`
    /// * `price` - Unit price, must be finite and `>= 0`
    ///
    /// # Errors
    /// Returns the first violation found, checked in the order id, name, quantity, price.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Result<Self, InvalidProduct> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), InvalidProduct> {
        if self.id.is_empty() {
            return Err(InvalidProduct::new(ProductField::Id, "must be a non-empty string"));
        }
        if self.name.is_empty() {
            return Err(InvalidProduct::new(ProductField::Name, "must be a non-empty string"));
        }
        if self.quantity < 0 {
            return Err(InvalidProduct::new(ProductField::Quantity, "must be an integer >= 0"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(InvalidProduct::new(ProductField::Price, "must be a finite number >= 0"));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// The name as used for indexing, searching and sorting.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Returns a copy with a different stock quantity.
    pub fn with_quantity(&self, quantity: i64) -> Result<Self, InvalidProduct> {
        Self::new(self.id.clone(), self.name.clone(), quantity, self.price)
    }

    /// Returns a copy with a different unit price.
    pub fn with_price(&self, price: f64) -> Result<Self, InvalidProduct> {
        Self::new(self.id.clone(), self.name.clone(), self.quantity, price)
    }

    /// Returns a copy with a different name.
    pub fn with_name(&self, name: impl Into<String>) -> Result<Self, InvalidProduct> {
        Self::new(self.id.clone(), name, self.quantity, self.price)
    }
}

/// Trims surrounding whitespace and lowercases a product name.
///
/// The normalized form is only ever used for lookups and ordering; the stored
/// name keeps its original casing and whitespace.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
