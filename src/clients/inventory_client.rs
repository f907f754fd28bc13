//! # Inventory Client
//!
//! Provides a high-level API for interacting with the inventory actor.
//! One method per inventory operation; message passing stays hidden.
use super::ClientError;
use crate::actor::{InventoryRequest, Response};
use crate::model::Product;
use crate::persistence::LoadMode;
use std::path::PathBuf;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the Inventory actor.
///
/// Cheap to clone; every clone talks to the same actor. The actor stops once
/// the last clone is dropped.
#[derive(Clone, Debug)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> InventoryRequest,
    ) -> Result<T, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        Ok(response.await.map_err(|_| ClientError::ActorDropped)??)
    }

    #[instrument(skip(self))]
    pub async fn add(&self, product: Product, overwrite: bool) -> Result<(), ClientError> {
        debug!("Sending request");
        self.request(|respond_to| InventoryRequest::Add {
            product,
            overwrite,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<Product, ClientError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| InventoryRequest::Remove { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Product, ClientError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| InventoryRequest::Get { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: &str, quantity: i64) -> Result<Product, ClientError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| InventoryRequest::UpdateQuantity {
            id,
            quantity,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn update_price(&self, id: &str, price: f64) -> Result<Product, ClientError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| InventoryRequest::UpdatePrice {
            id,
            price,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn update_name(&self, id: &str, name: &str) -> Result<Product, ClientError> {
        debug!("Sending request");
        let (id, name) = (id.to_string(), name.to_string());
        self.request(|respond_to| InventoryRequest::UpdateName {
            id,
            name,
            respond_to,
        })
        .await
    }

    /// Searches by name; see [`Inventory::search_by_name`](crate::inventory::Inventory::search_by_name).
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, query: &str, exact: bool) -> Result<Vec<Product>, ClientError> {
        debug!("Sending request");
        let query = query.to_string();
        self.request(|respond_to| InventoryRequest::Search {
            query,
            exact,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, ClientError> {
        debug!("Sending request");
        self.request(|respond_to| InventoryRequest::List { respond_to })
            .await
    }

    /// Number of products currently stored.
    pub async fn len(&self) -> Result<usize, ClientError> {
        self.request(|respond_to| InventoryRequest::Len { respond_to })
            .await
    }

    #[instrument(skip(self, path))]
    pub async fn save(&self, path: impl Into<PathBuf>) -> Result<(), ClientError> {
        let path = path.into();
        debug!(path = %path.display(), "Sending request");
        self.request(|respond_to| InventoryRequest::Save { path, respond_to })
            .await
    }

    /// Loads a snapshot and returns the number of records applied.
    #[instrument(skip(self, path))]
    pub async fn load(&self, path: impl Into<PathBuf>, mode: LoadMode) -> Result<usize, ClientError> {
        let path = path.into();
        debug!(path = %path.display(), "Sending request");
        self.request(|respond_to| InventoryRequest::Load {
            path,
            mode,
            respond_to,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::mock::{create_mock_client, expect_add, expect_load, expect_save, expect_search};
    use crate::inventory::InventoryError;

    #[tokio::test]
    async fn test_add_forwards_product_and_flag() {
        let (client, mut receiver) = create_mock_client(10);

        let pen = Product::new("A1", "Pen", 1, 1.0).unwrap();
        let expected = pen.clone();
        let task = tokio::spawn(async move { client.add(pen, true).await });

        let (product, overwrite, responder) = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        assert_eq!(product, expected);
        assert!(overwrite);
        responder.send(Ok(())).unwrap();

        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_search_returns_actor_results() {
        let (client, mut receiver) = create_mock_client(10);
        let task = tokio::spawn(async move { client.search_by_name("pen", false).await });

        let (query, exact, responder) = expect_search(&mut receiver)
            .await
            .expect("Expected Search request");
        assert_eq!(query, "pen");
        assert!(!exact);
        responder
            .send(Ok(vec![Product::new("A1", "Red Pen", 1, 1.0).unwrap()]))
            .unwrap();

        let hits = task.await.unwrap().unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_inventory_errors_pass_through() {
        let (client, mut receiver) = create_mock_client(10);
        let task = tokio::spawn(async move { client.load("snapshot.json", LoadMode::Merge).await });

        let (path, mode, responder) = expect_load(&mut receiver)
            .await
            .expect("Expected Load request");
        assert_eq!(path, PathBuf::from("snapshot.json"));
        assert_eq!(mode, LoadMode::Merge);
        responder
            .send(Err(InventoryError::MalformedData {
                record: None,
                detail: "expected an array".into(),
            }))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(
            err.inventory(),
            Some(InventoryError::MalformedData { .. })
        ));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_reported() {
        let (client, mut receiver) = create_mock_client(10);
        let task = tokio::spawn(async move { client.save("out.json").await });

        let (_, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        drop(responder);

        assert!(matches!(
            task.await.unwrap().unwrap_err(),
            ClientError::ActorDropped
        ));
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert!(matches!(
            client.len().await.unwrap_err(),
            ClientError::ActorClosed
        ));
    }
}
