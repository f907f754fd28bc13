use inventory_recipe::inventory::{Inventory, InventoryError, IoOperation};
use inventory_recipe::model::Product;
use inventory_recipe::persistence::LoadMode;
use serde_json::Value;
use tempfile::TempDir;

fn product(id: &str, name: &str, quantity: i64, price: f64) -> Product {
    Product::new(id, name, quantity, price).expect("valid product")
}

fn stocked() -> Inventory {
    let mut inventory = Inventory::new();
    for p in [
        product("P1", "Red Pen", 10, 1.0),
        product("P2", "red pencil", 4, 0.5),
        product("P3", "Blue Pen", 7, 1.2),
        product("Q1", "  Lápiz  ", 0, 0.1 + 0.2),
    ] {
        inventory.add(p, false).unwrap();
    }
    inventory
}

/// Save to disk and load into a fresh inventory: every field survives exactly.
#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let original = stocked();
    original.save(&path).expect("Failed to save");

    let mut restored = Inventory::new();
    let records = restored.load(&path, LoadMode::Replace).expect("Failed to load");

    assert_eq!(records, 4);
    assert_eq!(restored.list_all(), original.list_all());
    assert_eq!(restored.get_by_id("Q1").unwrap().price(), 0.1 + 0.2);
    assert_eq!(restored.get_by_id("Q1").unwrap().name(), "  Lápiz  ");
}

/// The file lists records in `list_all` order, not insertion order.
#[test]
fn test_saved_file_is_sorted_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    stocked().save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    let ids: Vec<&str> = value
        .as_array()
        .expect("root is an array")
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["P3", "Q1", "P1", "P2"]);

    let first = &value[0];
    assert_eq!(first["name"], "Blue Pen");
    assert_eq!(first["quantity"], 7);
    assert_eq!(first["price"], 1.2);
}

#[test]
fn test_merge_overwrites_and_keeps_others() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("incoming.json");
    std::fs::write(
        &path,
        r#"[
            { "id": "A1", "name": "Pen", "quantity": 9, "price": 1.0 },
            { "id": "B2", "name": "Paper", "quantity": 50, "price": 0.02 }
        ]"#,
    )
    .unwrap();

    let mut inventory = Inventory::new();
    inventory.add(product("A1", "Pen", 5, 1.0), false).unwrap();
    inventory.add(product("C3", "Ink", 1, 4.0), false).unwrap();

    inventory.load(&path, LoadMode::Merge).unwrap();

    assert_eq!(inventory.get_by_id("A1").unwrap().quantity(), 9);
    assert!(inventory.contains("B2"));
    assert!(inventory.contains("C3"), "merge must not delete absent products");
    assert_eq!(inventory.len(), 3);
}

#[test]
fn test_object_document_leaves_inventory_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("object.json");
    std::fs::write(&path, r#"{ "products": [] }"#).unwrap();

    let mut inventory = stocked();
    let before = inventory.list_all();

    let err = inventory.load(&path, LoadMode::Replace).unwrap_err();
    assert!(
        matches!(err, InventoryError::MalformedData { record: None, .. }),
        "unexpected error: {err:?}"
    );
    assert_eq!(inventory.list_all(), before);
}

#[test]
fn test_bad_record_is_identified() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"[
            { "id": "A1", "name": "Pen", "quantity": 1, "price": 1.0 },
            { "id": "A2", "name": "Pen", "quantity": 1, "price": 1.0 },
            { "id": "A3", "name": "Pen", "price": 1.0 }
        ]"#,
    )
    .unwrap();

    let mut inventory = stocked();
    match inventory.load(&path, LoadMode::Merge).unwrap_err() {
        InventoryError::MalformedData { record, detail } => {
            assert_eq!(record, Some(2));
            assert!(detail.contains("A3"), "{detail}");
            assert!(detail.contains("quantity"), "{detail}");
        }
        other => panic!("expected MalformedData, got {other:?}"),
    }
    assert!(!inventory.contains("A1"));
}

#[test]
fn test_legacy_snapshot_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventario.json");
    std::fs::write(
        &path,
        r#"[{ "id": "X1", "nombre": "Cuaderno", "cantidad": 12, "precio": 2.5 }]"#,
    )
    .unwrap();

    let mut inventory = Inventory::new();
    inventory.load(&path, LoadMode::Replace).unwrap();
    assert_eq!(
        inventory.get_by_id("X1").unwrap(),
        &product("X1", "Cuaderno", 12, 2.5)
    );
    assert_eq!(inventory.search_by_name("CUADERNO", true).len(), 1);
}

#[test]
fn test_missing_file_is_io_read_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let mut inventory = stocked();
    match inventory.load(&path, LoadMode::Replace).unwrap_err() {
        InventoryError::Io {
            operation,
            path: failed,
            source,
        } => {
            assert_eq!(operation, IoOperation::Read);
            assert_eq!(failed, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io, got {other:?}"),
    }
    assert_eq!(inventory.len(), 4);
}

#[test]
fn test_missing_directory_is_io_write_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("dir.json");

    let err = stocked().save(&path).unwrap_err();
    assert!(matches!(
        err,
        InventoryError::Io {
            operation: IoOperation::Write,
            ..
        }
    ));
}

#[test]
fn test_empty_inventory_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    Inventory::new().save(&path).unwrap();

    let mut inventory = stocked();
    assert_eq!(inventory.load(&path, LoadMode::Replace).unwrap(), 0);
    assert!(inventory.is_empty());
}

#[test]
fn test_full_precision_price_survives_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("precise.json");
    let price = 394301.33835633675_f64;

    let mut original = Inventory::new();
    original.add(product("H1", "Stapler", 2, price), false).unwrap();
    original.save(&path).unwrap();

    let mut restored = Inventory::new();
    restored.load(&path, LoadMode::Replace).unwrap();
    assert_eq!(restored.get_by_id("H1").unwrap().price().to_bits(), price.to_bits());
}
