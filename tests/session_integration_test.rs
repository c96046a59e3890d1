use tempfile::TempDir;

use wijnproeverij::core::session::{ORDER_FILE, WINE_FILE};
use wijnproeverij::{AppError, LocalStorage, Tasting, TastingFiles, WineEntry};

fn open(dir: &TempDir) -> Tasting<LocalStorage> {
    Tasting::open(LocalStorage::new(dir.path()), TastingFiles::default()).unwrap()
}

fn wine(name: &str, price: f64) -> WineEntry {
    WineEntry {
        name: name.to_string(),
        price,
    }
}

#[test]
fn end_to_end_session_round_trip() {
    let temp_dir = TempDir::new().unwrap();

    // Fill the catalog and place the orders of one evening.
    let mut tasting = open(&temp_dir);
    tasting
        .apply_edits(vec![wine("Merlot", 10.0), wine("Shiraz", 12.0)])
        .unwrap();
    tasting.add_order("Alice", "Merlot", 2).unwrap();
    tasting.add_order("Bob", "Merlot", 1).unwrap();
    tasting.add_order("Alice", "Shiraz", 3).unwrap();

    // Both artifacts exist on disk with their header rows.
    let wine_path = temp_dir.path().join(WINE_FILE);
    let order_path = temp_dir.path().join(ORDER_FILE);
    assert!(wine_path.exists());
    assert!(order_path.exists());

    let wine_csv = std::fs::read_to_string(&wine_path).unwrap();
    assert!(wine_csv.starts_with("Wijnnaam,Prijs\n"));
    let order_csv = std::fs::read_to_string(&order_path).unwrap();
    assert!(order_csv.starts_with("Naam,Wijnnaam,Aantal,Prijs_per_stuk\n"));

    // A fresh session sees the same state and totals.
    let reopened = open(&temp_dir);
    assert_eq!(reopened.catalog().len(), 2);
    assert_eq!(reopened.orders().len(), 3);

    let summary = reopened.summary();
    assert_eq!(summary.total_bottles, 6);
    assert_eq!(summary.total_amount, 66.0);
    assert_eq!(summary.free_bottles, 1);

    let mut rows = summary.per_person.clone();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].bottles, 5);
    assert_eq!(rows[0].amount, 56.0);
    assert_eq!(rows[1].name, "Bob");
    assert_eq!(rows[1].bottles, 1);
    assert_eq!(rows[1].amount, 10.0);
}

#[test]
fn missing_files_open_as_an_empty_session() {
    let temp_dir = TempDir::new().unwrap();
    let tasting = open(&temp_dir);

    assert!(tasting.catalog().is_empty());
    assert!(tasting.orders().is_empty());

    let summary = tasting.summary();
    assert_eq!(summary.total_bottles, 0);
    assert_eq!(summary.free_bottles, 0);
}

#[test]
fn reset_removes_the_order_artifact_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let order_path = temp_dir.path().join(ORDER_FILE);

    let mut tasting = open(&temp_dir);
    tasting.apply_edits(vec![wine("Merlot", 10.0)]).unwrap();
    tasting.add_order("Alice", "Merlot", 2).unwrap();
    assert!(order_path.exists());

    tasting.reset().unwrap();
    assert!(!order_path.exists());

    // Resetting an already empty tasting stays a no-op.
    tasting.reset().unwrap();
    assert!(!order_path.exists());

    // The next order recreates the artifact with exactly one line.
    tasting.add_order("Bob", "Merlot", 1).unwrap();
    assert!(order_path.exists());

    let reopened = open(&temp_dir);
    assert_eq!(reopened.orders().len(), 1);
    assert_eq!(reopened.orders()[0].person, "Bob");
}

#[test]
fn catalog_replace_preserves_order_snapshots() {
    let temp_dir = TempDir::new().unwrap();

    let mut tasting = open(&temp_dir);
    tasting
        .apply_edits(vec![wine("Merlot", 10.0), wine("Shiraz", 12.0)])
        .unwrap();
    tasting.add_order("Alice", "Merlot", 2).unwrap();

    // Replace the catalog with a table that no longer carries Merlot.
    tasting.apply_edits(vec![wine("Shiraz", 13.0)]).unwrap();

    let reopened = open(&temp_dir);
    assert_eq!(reopened.catalog().len(), 1);
    assert_eq!(reopened.orders().len(), 1);
    assert_eq!(reopened.orders()[0].wine, "Merlot");
    assert_eq!(reopened.orders()[0].unit_price, 10.0);

    let summary = reopened.summary();
    assert_eq!(summary.total_amount, 20.0);
}

#[test]
fn price_changes_never_touch_existing_orders() {
    let temp_dir = TempDir::new().unwrap();

    let mut tasting = open(&temp_dir);
    tasting.apply_edits(vec![wine("Merlot", 10.0)]).unwrap();
    tasting.add_order("Alice", "Merlot", 2).unwrap();

    tasting.set_wine("Merlot", 15.0).unwrap();
    tasting.add_order("Bob", "Merlot", 1).unwrap();

    let reopened = open(&temp_dir);
    assert_eq!(reopened.orders()[0].unit_price, 10.0);
    assert_eq!(reopened.orders()[1].unit_price, 15.0);
    assert_eq!(reopened.summary().total_amount, 35.0);
}

#[test]
fn ordering_without_a_catalog_is_blocked() {
    let temp_dir = TempDir::new().unwrap();
    let mut tasting = open(&temp_dir);

    let err = tasting.add_order("Alice", "Merlot", 1).unwrap_err();
    assert!(matches!(err, AppError::EmptyCatalog));
    assert!(!temp_dir.path().join(ORDER_FILE).exists());
}
