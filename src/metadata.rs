//! Per-item `metadata.json` loading and parsing.
//!
//! Each item directory carries one metadata document. Every field in it is
//! optional — absence degrades to a documented default during record
//! building — and unknown fields are ignored, so the schema can grow without
//! breaking older catalogs.
//!
//! ```json
//! {
//!   "brand": "Levis",
//!   "subtype": "Denim jacket",
//!   "size": "M",
//!   "description": "Light wash, minor wear on cuffs",
//!   "finance": { "salePrice": 12000, "facebookPrice": 13500, "saleStatus": "Available" },
//!   "businessIntelligence": { "realSizeOverride": "S", "bodyType": "UPPER" },
//!   "measurements": { "width": 52.0, "length": 68.5 },
//!   "logistics": { "location": "Box 4" }
//! }
//! ```
//!
//! ## Failure posture
//!
//! Loading never aborts a catalog build. The three outcomes — parsed, absent,
//! invalid — are explicit values; the caller turns the latter two into
//! per-item skip diagnostics. A document that is present but malformed is
//! reported with the parser's message so the operator can fix the file.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Filename of the per-item metadata document.
pub const METADATA_FILENAME: &str = "metadata.json";

/// Parsed metadata document. Loosely typed: every field optional.
///
/// Prices are read as `i64` so a stray negative number is a normalization
/// concern (clamped to zero), not a parse failure that hides the item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMetadata {
    pub brand: Option<String>,
    pub subtype: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub finance: Option<RawFinance>,
    #[serde(rename = "businessIntelligence")]
    pub business_intelligence: Option<RawIntelligence>,
    pub measurements: Option<RawMeasurements>,
    pub logistics: Option<RawLogistics>,
}

/// Nested financial block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFinance {
    #[serde(rename = "salePrice")]
    pub sale_price: Option<i64>,
    #[serde(rename = "facebookPrice")]
    pub facebook_price: Option<i64>,
    #[serde(rename = "saleStatus")]
    pub sale_status: Option<String>,
}

/// Nested size/body-type intelligence block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIntelligence {
    #[serde(rename = "realSizeOverride")]
    pub real_size_override: Option<String>,
    #[serde(rename = "bodyType")]
    pub body_type: Option<String>,
}

/// Nested garment measurements, in centimeters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeasurements {
    pub width: Option<f64>,
    pub length: Option<f64>,
}

/// Nested logistics block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLogistics {
    pub location: Option<String>,
}

/// Result of attempting to load one item's metadata document.
#[derive(Debug)]
pub enum MetadataOutcome {
    Parsed(RawMetadata),
    /// No `metadata.json` in the item directory.
    Absent,
    /// Document present but unreadable or malformed; carries the cause.
    Invalid(String),
}

/// Load and parse `metadata.json` from an item directory.
pub fn load(item_dir: &Path) -> MetadataOutcome {
    let path = item_dir.join(METADATA_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return MetadataOutcome::Absent,
        Err(err) => return MetadataOutcome::Invalid(err.to_string()),
    };
    match serde_json::from_str(&content) {
        Ok(meta) => MetadataOutcome::Parsed(meta),
        Err(err) => MetadataOutcome::Invalid(err.to_string()),
    }
}
