//! # Inventory Demo
//!
//! A scripted run through the inventory system:
//! 1. Start an [`InventorySystem`], restoring the snapshot if one exists.
//! 2. Stock a few products, search and update them.
//! 3. Shut down, which writes the snapshot back.
//!
//! The snapshot path is the first argument (default `inventory.json`).

use inventory_recipe::clients::ClientError;
use inventory_recipe::inventory::InventoryError;
use inventory_recipe::lifecycle::{setup_tracing, InventoryConfig, InventorySystem, DEFAULT_SNAPSHOT_PATH};
use inventory_recipe::model::Product;
use inventory_recipe::report::format_table;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string());
    info!(%path, "Starting inventory demo");

    let system = InventorySystem::start(InventoryConfig::new(path));
    let client = system.client.clone();

    let span = tracing::info_span!("stocking");
    async {
        for (id, name, quantity, price) in [
            ("P1", "Red Pen", 10, 1.0),
            ("P2", "red pencil", 4, 0.5),
            ("P3", "Blue Pen", 7, 1.2),
        ] {
            let product = Product::new(id, name, quantity, price).map_err(|e| e.to_string())?;
            match client.add(product, false).await {
                Ok(()) => info!(%id, "Product added"),
                Err(ClientError::Inventory(InventoryError::DuplicateId { .. })) => {
                    warn!(%id, "Already stocked, keeping stored product")
                }
                Err(e) => return Err(e.to_string()),
            }
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("restocking");
    async {
        let updated = client
            .update_quantity("P3", 12)
            .await
            .map_err(|e| e.to_string())?;
        info!(id = updated.id(), quantity = updated.quantity(), "Quantity updated");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let pens = client
        .search_by_name("pen", false)
        .await
        .map_err(|e| e.to_string())?;
    println!("Products matching \"pen\":\n{}\n", format_table(&pens));

    let all = client.list_all().await.map_err(|e| e.to_string())?;
    println!("All products:\n{}", format_table(&all));

    drop(client);

    // Shutdown system gracefully (writes the snapshot)
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
