//! # Inventory Messages
//!
//! Requests sent from an [`InventoryClient`](crate::clients::InventoryClient)
//! to the [`InventoryActor`](super::InventoryActor). There is one variant per
//! inventory operation; each carries a oneshot sender for the reply.

use crate::inventory::InventoryError;
use crate::model::Product;
use crate::persistence::LoadMode;
use std::path::PathBuf;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, InventoryError>>;

#[derive(Debug)]
pub enum InventoryRequest {
    Add {
        product: Product,
        overwrite: bool,
        respond_to: Response<()>,
    },
    Remove {
        id: String,
        respond_to: Response<Product>,
    },
    Get {
        id: String,
        respond_to: Response<Product>,
    },
    UpdateQuantity {
        id: String,
        quantity: i64,
        respond_to: Response<Product>,
    },
    UpdatePrice {
        id: String,
        price: f64,
        respond_to: Response<Product>,
    },
    UpdateName {
        id: String,
        name: String,
        respond_to: Response<Product>,
    },
    Search {
        query: String,
        exact: bool,
        respond_to: Response<Vec<Product>>,
    },
    List {
        respond_to: Response<Vec<Product>>,
    },
    Len {
        respond_to: Response<usize>,
    },
    Save {
        path: PathBuf,
        respond_to: Response<()>,
    },
    Load {
        path: PathBuf,
        mode: LoadMode,
        respond_to: Response<usize>,
    },
}

impl InventoryRequest {
    /// Short operation name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            InventoryRequest::Add { .. } => "Add",
            InventoryRequest::Remove { .. } => "Remove",
            InventoryRequest::Get { .. } => "Get",
            InventoryRequest::UpdateQuantity { .. } => "UpdateQuantity",
            InventoryRequest::UpdatePrice { .. } => "UpdatePrice",
            InventoryRequest::UpdateName { .. } => "UpdateName",
            InventoryRequest::Search { .. } => "Search",
            InventoryRequest::List { .. } => "List",
            InventoryRequest::Len { .. } => "Len",
            InventoryRequest::Save { .. } => "Save",
            InventoryRequest::Load { .. } => "Load",
        }
    }
}
