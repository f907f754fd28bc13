//! Error types for the Inventory.

use crate::model::InvalidProduct;
use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

/// The file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Read,
    Write,
}

impl Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoOperation::Read => f.write_str("read"),
            IoOperation::Write => f.write_str("write"),
        }
    }
}

/// Errors that can occur during inventory operations.
///
/// Every variant is recoverable by the caller; the inventory never logs or
/// aborts on its own.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A product value failed validation.
    #[error(transparent)]
    InvalidProduct(#[from] InvalidProduct),

    /// A product with this id is already stored and overwriting was not requested.
    #[error("Product already exists: {id}")]
    DuplicateId { id: String },

    /// The requested product was not found.
    #[error("Product not found: {id}")]
    NotFound { id: String },

    /// A snapshot document could not be turned into products.
    ///
    /// `record` is the zero-based position of the offending record, or `None`
    /// when the document as a whole is unusable.
    #[error("Malformed inventory data{}: {detail}", .record.map(|i| format!(" at record {i}")).unwrap_or_default())]
    MalformedData {
        record: Option<usize>,
        detail: String,
    },

    /// The product set could not be serialized into a snapshot document.
    #[error("Failed to encode inventory snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// Reading or writing a snapshot file failed.
    #[error("Failed to {operation} {}: {source}", .path.display())]
    Io {
        operation: IoOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InventoryError {
    pub(crate) fn not_found(id: &str) -> Self {
        InventoryError::NotFound { id: id.to_string() }
    }

    pub(crate) fn malformed(record: Option<usize>, detail: impl Into<String>) -> Self {
        InventoryError::MalformedData {
            record,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductField;

    #[test]
    fn test_messages() {
        let err = InventoryError::not_found("A1");
        assert_eq!(err.to_string(), "Product not found: A1");

        let err = InventoryError::malformed(None, "expected an array");
        assert_eq!(err.to_string(), "Malformed inventory data: expected an array");

        let err = InventoryError::malformed(Some(2), "missing field `price`");
        assert_eq!(
            err.to_string(),
            "Malformed inventory data at record 2: missing field `price`"
        );

        let err = InventoryError::from(InvalidProduct {
            field: ProductField::Name,
            reason: "must be a non-empty string",
        });
        assert_eq!(err.to_string(), "Invalid product name: must be a non-empty string");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = InventoryError::Io {
            operation: IoOperation::Write,
            path: PathBuf::from("/nowhere/inventory.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write /nowhere/inventory.json: no such directory"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_encode_error_is_not_malformed_data() {
        use std::error::Error;

        let cause = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = InventoryError::Encode(cause);
        assert!(
            err.to_string().starts_with("Failed to encode inventory snapshot: "),
            "{err}"
        );
        assert!(err.source().is_some());
    }
}
