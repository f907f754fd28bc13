//! # Mock Helpers
//!
//! Utilities for testing code that talks to an [`InventoryClient`] without
//! spawning a real [`InventoryActor`](super::InventoryActor).
//!
//! Use [`create_mock_client`] to get a client and the raw request receiver.
//! Drive the code under test in a spawned task, then pop requests with the
//! `expect_*` helpers and answer them through the returned responder.
//!
//! ```rust
//! use inventory_recipe::actor::mock::{create_mock_client, expect_get};
//! use inventory_recipe::model::Product;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(8);
//!     let task = tokio::spawn(async move { client.get_by_id("A1").await });
//!
//!     let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
//!     assert_eq!(id, "A1");
//!     responder.send(Ok(Product::new("A1", "Pen", 1, 1.0).unwrap())).unwrap();
//!
//!     assert_eq!(task.await.unwrap().unwrap().name(), "Pen");
//! }
//! ```

use super::{InventoryRequest, Response};
use crate::clients::InventoryClient;
use crate::model::Product;
use crate::persistence::LoadMode;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Creates a client whose requests land in the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(Product, bool, Response<()>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Add {
            product,
            overwrite,
            respond_to,
        }) => Some((product, overwrite, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, Response<Product>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Search request
pub async fn expect_search(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, bool, Response<Vec<Product>>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Search {
            query,
            exact,
            respond_to,
        }) => Some((query, exact, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(PathBuf, Response<()>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Save { path, respond_to }) => Some((path, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Load request
pub async fn expect_load(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(PathBuf, LoadMode, Response<usize>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Load {
            path,
            mode,
            respond_to,
        }) => Some((path, mode, respond_to)),
        _ => None,
    }
}
