//! End-to-end pipeline tests: build → query → paginate over a real
//! directory tree, the way the presentation layer drives the crate.

use std::fs;
use std::path::{Path, PathBuf};
use stockroom::catalog::Catalog;
use stockroom::paging::{self, Pager};
use stockroom::query::{Selection, SortMode, query};
use stockroom::record::SaleStatus;
use tempfile::TempDir;

/// Write one item directory with a metadata document and a mini cover.
fn write_item(root: &Path, rel: &str, price: i64, status: &str) -> PathBuf {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    let id = dir.file_name().unwrap().to_string_lossy().to_string();
    fs::write(
        dir.join("metadata.json"),
        format!(
            r#"{{"brand": "Levis", "finance": {{"salePrice": {price}, "saleStatus": "{status}"}}}}"#
        ),
    )
    .unwrap();
    fs::write(dir.join(format!("{id}_Frente_Mini.jpg")), b"img").unwrap();
    dir
}

/// 30 items: 20 Available priced 10000..20000 in steps of 500, 10 Sold.
fn thirty_item_root() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for i in 0..20 {
        let price = 10000 + 500 * i;
        write_item(
            tmp.path(),
            &format!("S1/Tops/AVL-{i:02}"),
            price,
            "Available",
        );
    }
    for i in 0..10 {
        write_item(tmp.path(), &format!("S1/Tops/SLD-{i:02}"), 5000, "Sold");
    }
    tmp
}

#[test]
fn available_by_price_fits_on_first_page() {
    let tmp = thirty_item_root();
    let catalog = Catalog::build(tmp.path()).unwrap();
    assert_eq!(catalog.len(), 30);

    let selection = Selection {
        statuses: vec![SaleStatus::Available],
        sort: SortMode::PriceAscending,
        ..Selection::default()
    };
    let filtered = query(&catalog, &selection);
    assert_eq!(filtered.len(), 20);

    let page = paging::paginate(&filtered, 0);
    assert_eq!(page.items.len(), 20);
    assert!(!page.has_prev);
    assert!(!page.has_next);

    let prices: Vec<u32> = page.items.iter().map(|i| i.price_sale).collect();
    let expected: Vec<u32> = (0..20).map(|i| 10000 + 500 * i).collect();
    assert_eq!(prices, expected);
}

#[test]
fn all_pages_concatenate_to_the_filtered_sequence() {
    let tmp = thirty_item_root();
    let catalog = Catalog::build(tmp.path()).unwrap();

    let selection = Selection {
        statuses: SaleStatus::ALL.to_vec(),
        ..Selection::default()
    };
    let filtered = query(&catalog, &selection);
    assert_eq!(filtered.len(), 30);
    assert_eq!(paging::page_count(filtered.len()), 2);

    let mut rebuilt: Vec<&str> = Vec::new();
    for page_index in 0..paging::page_count(filtered.len()) {
        let page = paging::paginate(&filtered, page_index);
        rebuilt.extend(page.items.iter().map(|i| i.id.as_str()));
    }
    let expected: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(rebuilt, expected);
}

#[test]
fn pager_follows_a_filter_change() {
    let tmp = thirty_item_root();
    let catalog = Catalog::build(tmp.path()).unwrap();
    let mut pager = Pager::new();

    // Browse to page 2 of the full inventory.
    let all = Selection {
        statuses: SaleStatus::ALL.to_vec(),
        ..Selection::default()
    };
    let filtered = query(&catalog, &all);
    pager.reset_if_count_changed(filtered.len());
    pager.next(filtered.len());
    assert_eq!(pager.cursor(), 1);

    // Narrowing to Available changes the count and resets the cursor.
    let available = Selection::default();
    let filtered = query(&catalog, &available);
    pager.reset_if_count_changed(filtered.len());
    assert_eq!(pager.cursor(), 0);
    let page = paging::paginate(&filtered, pager.cursor());
    assert!(!page.items.is_empty());
}

#[test]
fn item_with_no_finance_block_defaults() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("S1/Tops/CAM-1");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("metadata.json"), r#"{"brand": "Zara"}"#).unwrap();
    fs::write(dir.join("CAM-1_Frente_Mini.jpg"), b"img").unwrap();

    let catalog = Catalog::build(tmp.path()).unwrap();
    let item = &catalog.items()[0];
    assert_eq!(item.price_sale, 0);
    assert_eq!(item.sale_status, SaleStatus::Available);
}

#[test]
fn coverless_directory_never_reaches_a_listing() {
    let tmp = thirty_item_root();
    let dir = tmp.path().join("S1/Tops/ZZZ-NOCOVER");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("metadata.json"), r#"{"brand": "Gap"}"#).unwrap();
    fs::write(dir.join("ZZZ-NOCOVER_Espalda_Mini.jpg"), b"img").unwrap();

    let catalog = Catalog::build(tmp.path()).unwrap();
    assert_eq!(catalog.len(), 30);
    assert_eq!(catalog.skipped().len(), 1);

    let selection = Selection {
        statuses: SaleStatus::ALL.to_vec(),
        ..Selection::default()
    };
    assert!(
        query(&catalog, &selection)
            .iter()
            .all(|i| i.id != "ZZZ-NOCOVER")
    );
}
