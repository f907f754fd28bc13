//! JSON snapshot codec.
//!
//! A snapshot is a JSON array of product records:
//!
//! ```text
//! [
//!   { "id": "A1", "name": "Red Pen", "quantity": 5, "price": 1.5 }
//! ]
//! ```
//!
//! Files written by the older Spanish-language tool (`nombre`, `cantidad`,
//! `precio`) decode as well. Unknown fields are ignored.

use crate::inventory::InventoryError;
use crate::model::Product;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// On-disk shape of one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "cantidad")]
    pub quantity: i64,
    #[serde(alias = "precio")]
    pub price: f64,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            quantity: product.quantity(),
            price: product.price(),
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = InventoryError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(Product::new(record.id, record.name, record.quantity, record.price)?)
    }
}

/// Serializes products, in the given order, as a pretty-printed JSON array.
///
/// # Errors
/// `Encode` if serde_json rejects the records. Validated products always
/// serialize, so this only surfaces a serializer fault.
pub fn encode<'a>(products: impl IntoIterator<Item = &'a Product>) -> Result<String, InventoryError> {
    let records: Vec<ProductRecord> = products.into_iter().map(ProductRecord::from).collect();
    serde_json::to_string_pretty(&records).map_err(InventoryError::Encode)
}

/// Parses and validates a whole snapshot document.
///
/// Either every record becomes a [`Product`] or the first faulty record is
/// reported; callers never see a partially decoded document.
pub fn decode(text: &str) -> Result<Vec<Product>, InventoryError> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| InventoryError::malformed(None, format!("invalid JSON: {e}")))?;

    let Value::Array(entries) = document else {
        return Err(InventoryError::malformed(
            None,
            format!(
                "expected an array of product records, found {}",
                kind_of(&document)
            ),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| decode_record(position, entry))
        .collect()
}

fn decode_record(position: usize, entry: Value) -> Result<Product, InventoryError> {
    let label = entry
        .get("id")
        .and_then(Value::as_str)
        .map(|id| format!("product {id:?}"))
        .unwrap_or_else(|| "product".to_string());

    let record: ProductRecord = serde_json::from_value(entry)
        .map_err(|e| InventoryError::malformed(Some(position), format!("{label}: {e}")))?;

    Product::try_from(record).map_err(|e| InventoryError::malformed(Some(position), format!("{label}: {e}")))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
