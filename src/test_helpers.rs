//! Shared test utilities for the stockroom test suite.
//!
//! Builds throwaway catalog trees under a `TempDir`: three-level directory
//! layouts, metadata documents assembled from flat key/value pairs, and
//! placeholder image files. Image filenames may contain `{id}`, which is
//! substituted with the item directory's name:
//!
//! ```rust
//! let tmp = fixture_root();
//! write_item(tmp.path(), "S1/Tops/CAM-1", simple_meta("Levis", 12000), COVER_AND_BACK);
//! let catalog = Catalog::build(tmp.path()).unwrap();
//! ```

use crate::gallery::Gallery;
use crate::metadata::METADATA_FILENAME;
use crate::record::{self, Item, SaleStatus};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Cover plus one extra shot, both in the preferred mini family.
pub const COVER_AND_BACK: &[&str] = &["{id}_Frente_Mini.jpg", "{id}_Espalda_Mini.jpg"];

/// Cover plus two extra shots.
pub const GALLERY_THREE: &[&str] = &[
    "{id}_Frente_Mini.jpg",
    "{id}_Espalda_Mini.jpg",
    "{id}_Detalle_Mini.jpg",
];

/// Fresh empty content root.
pub fn fixture_root() -> TempDir {
    TempDir::new().unwrap()
}

/// Create an item directory at `root/rel` with metadata and images.
/// Returns the item directory path. `rel`'s last component is the item id.
pub fn write_item(root: &Path, rel: &str, metadata_json: String, images: &[&str]) -> PathBuf {
    let dir = write_images(root, rel, images);
    fs::write(dir.join(METADATA_FILENAME), metadata_json).unwrap();
    dir
}

/// Create an item directory with placeholder image files only (no
/// metadata document). `{id}` in names is replaced by the directory name.
pub fn write_images(root: &Path, rel: &str, images: &[&str]) -> PathBuf {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    let id = dir.file_name().unwrap().to_string_lossy().to_string();
    for name in images {
        fs::write(dir.join(name.replace("{id}", &id)), b"img").unwrap();
    }
    dir
}

/// Assemble a metadata document from flat key/value pairs.
///
/// Keys: `brand`, `subtype`, `size`, `description` (top level), `price`,
/// `alt_price`, `status` (finance), `size_override`, `body_type`
/// (businessIntelligence), `width`, `length` (measurements), `location`
/// (logistics). Numeric values are passed as strings and parsed here.
pub fn meta(fields: &[(&str, &str)]) -> String {
    let mut doc = json!({});
    for (key, value) in fields {
        match *key {
            "brand" | "subtype" | "size" | "description" => {
                doc[key] = json!(value);
            }
            "price" => doc["finance"]["salePrice"] = json!(value.parse::<i64>().unwrap()),
            "alt_price" => doc["finance"]["facebookPrice"] = json!(value.parse::<i64>().unwrap()),
            "status" => doc["finance"]["saleStatus"] = json!(value),
            "size_override" => {
                doc["businessIntelligence"]["realSizeOverride"] = json!(value);
            }
            "body_type" => doc["businessIntelligence"]["bodyType"] = json!(value),
            "width" => doc["measurements"]["width"] = json!(value.parse::<f64>().unwrap()),
            "length" => doc["measurements"]["length"] = json!(value.parse::<f64>().unwrap()),
            "location" => doc["logistics"]["location"] = json!(value),
            other => panic!("unknown metadata fixture key '{other}'"),
        }
    }
    doc.to_string()
}

/// Metadata with just a brand and a sale price.
pub fn simple_meta(brand: &str, price: i64) -> String {
    meta(&[("brand", brand), ("price", &price.to_string())])
}

/// Metadata with a brand and a legacy top-level size.
pub fn meta_with_size(brand: &str, size: &str) -> String {
    meta(&[("brand", brand), ("size", size)])
}

/// Build an `Item` directly, bypassing the filesystem. Brand is stored
/// as given (pass it uppercased to match normalized catalogs).
pub fn test_item(id: &str, brand: &str, size: &str, price: u32, status: SaleStatus) -> Item {
    let raw = serde_json::from_str(&meta(&[
        ("brand", brand),
        ("size", size),
        ("price", &price.to_string()),
        ("status", status.as_str()),
    ]))
    .unwrap();
    record::build_item(
        id,
        &raw,
        Gallery {
            cover: PathBuf::from(format!("{id}_Frente_Mini.jpg")),
            images: vec![PathBuf::from(format!("{id}_Frente_Mini.jpg"))],
        },
    )
}
