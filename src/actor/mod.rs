//! # Inventory Actor
//!
//! The actor is the "Server" half of a shared inventory. It owns the
//! [`Inventory`] and the receiving end of the request channel.
//!
//! **Concurrency Model**:
//! Any number of cloned [`InventoryClient`]s may send requests at once, but the
//! actor handles them *sequentially* in a single loop. Every operation therefore
//! runs to completion before the next one starts, which is what keeps the
//! inventory's name index consistent. No `Mutex` or `RwLock` is needed: safety
//! comes from exclusive ownership of the state inside the task.
//!
//! Snapshot save/load is plain blocking file I/O executed on the actor task.

pub mod messages;
pub mod mock;

pub use messages::*;

use crate::clients::InventoryClient;
use crate::inventory::{Inventory, InventoryError};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that serializes all access to one [`Inventory`].
pub struct InventoryActor {
    receiver: mpsc::Receiver<InventoryRequest>,
    inventory: Inventory,
}

impl InventoryActor {
    /// Creates the actor around `inventory` together with its first client.
    pub fn new(buffer_size: usize, inventory: Inventory) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            inventory,
        };
        (actor, InventoryClient::new(sender))
    }

    /// Runs the actor's event loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        info!(size = self.inventory.len(), "Actor started");

        while let Some(request) = self.receiver.recv().await {
            self.handle(request);
        }

        info!(size = self.inventory.len(), "Shutdown");
    }

    fn handle(&mut self, request: InventoryRequest) {
        let op = request.name();
        match request {
            InventoryRequest::Add {
                product,
                overwrite,
                respond_to,
            } => {
                debug!(op, ?product, overwrite);
                let id = product.id().to_string();
                let result = self.inventory.add(product, overwrite);
                self.reply_mutation(op, &id, respond_to, result);
            }
            InventoryRequest::Remove { id, respond_to } => {
                debug!(op, %id);
                let result = self.inventory.remove(&id);
                self.reply_mutation(op, &id, respond_to, result);
            }
            InventoryRequest::Get { id, respond_to } => {
                let result = self.inventory.get_by_id(&id).cloned();
                debug!(op, %id, found = result.is_ok());
                let _ = respond_to.send(result);
            }
            InventoryRequest::UpdateQuantity {
                id,
                quantity,
                respond_to,
            } => {
                debug!(op, %id, quantity);
                let result = self.inventory.update_quantity(&id, quantity);
                self.reply_mutation(op, &id, respond_to, result);
            }
            InventoryRequest::UpdatePrice {
                id,
                price,
                respond_to,
            } => {
                debug!(op, %id, price);
                let result = self.inventory.update_price(&id, price);
                self.reply_mutation(op, &id, respond_to, result);
            }
            InventoryRequest::UpdateName {
                id,
                name,
                respond_to,
            } => {
                debug!(op, %id, %name);
                let result = self.inventory.update_name(&id, &name);
                self.reply_mutation(op, &id, respond_to, result);
            }
            InventoryRequest::Search {
                query,
                exact,
                respond_to,
            } => {
                let results = self.inventory.search_by_name(&query, exact);
                debug!(op, %query, exact, hits = results.len());
                let _ = respond_to.send(Ok(results));
            }
            InventoryRequest::List { respond_to } => {
                debug!(op, size = self.inventory.len());
                let _ = respond_to.send(Ok(self.inventory.list_all()));
            }
            InventoryRequest::Len { respond_to } => {
                let _ = respond_to.send(Ok(self.inventory.len()));
            }
            InventoryRequest::Save { path, respond_to } => {
                debug!(op, path = %path.display());
                let result = self.inventory.save(&path);
                match &result {
                    Ok(()) => info!(op, path = %path.display(), size = self.inventory.len(), "Saved"),
                    Err(e) => warn!(op, path = %path.display(), error = %e, "Save failed"),
                }
                let _ = respond_to.send(result);
            }
            InventoryRequest::Load {
                path,
                mode,
                respond_to,
            } => {
                debug!(op, path = %path.display(), %mode);
                let result = self.inventory.load(&path, mode);
                match &result {
                    Ok(records) => info!(
                        op,
                        path = %path.display(),
                        %mode,
                        records,
                        size = self.inventory.len(),
                        "Loaded"
                    ),
                    Err(e) => warn!(op, path = %path.display(), %mode, error = %e, "Load failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }

    fn reply_mutation<T>(
        &self,
        op: &'static str,
        id: &str,
        respond_to: Response<T>,
        result: Result<T, InventoryError>,
    ) {
        match &result {
            Ok(_) => info!(op, %id, size = self.inventory.len(), "Ok"),
            Err(e) => warn!(op, %id, error = %e, "Failed"),
        }
        let _ = respond_to.send(result);
    }
}
