//! The normalized `Item` record and its construction.
//!
//! An `Item` is built once, during a catalog build, from the parsed metadata
//! document plus the resolved gallery, and never mutated afterward. Every
//! optional metadata field degrades to a documented default:
//!
//! | Field | Source | Default |
//! |-------|--------|---------|
//! | `brand` | `brand`, uppercased | `"GENERIC"` |
//! | `size` | `businessIntelligence.realSizeOverride` → `size` | `"N/A"` |
//! | `body_type` | `businessIntelligence.bodyType` | `Upper` |
//! | `subtype` | `subtype` | `"Garment"` |
//! | `price_sale` | `finance.salePrice`, clamped to ≥ 0 | `0` |
//! | `price_alt` | `finance.facebookPrice`, clamped to ≥ 0 | `0` |
//! | `sale_status` | `finance.saleStatus` | `Available` |
//! | `description` | `description` | `""` |
//! | `measurements` | `measurements.{width,length}` | `0.0` / `0.0` |
//! | `location` | `logistics.location` | `"?"` |
//!
//! The cover image is the one field with no default: construction is only
//! attempted once gallery resolution has produced one.

use crate::gallery::Gallery;
use crate::metadata::RawMetadata;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_BRAND: &str = "GENERIC";
pub const DEFAULT_SIZE: &str = "N/A";
pub const DEFAULT_SUBTYPE: &str = "Garment";
/// Marker for an unrecorded storage location.
pub const UNKNOWN_LOCATION: &str = "?";

/// Sale state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SaleStatus {
    Available,
    Reserved,
    Sold,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Available,
        SaleStatus::Reserved,
        SaleStatus::Sold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SaleStatus::Available => "Available",
            SaleStatus::Reserved => "Reserved",
            SaleStatus::Sold => "Sold",
        }
    }

    /// Lenient parse used during normalization: missing or unrecognized
    /// values fall back to `Available`, so a typo in one document marks the
    /// item available rather than hiding it.
    fn from_metadata(value: Option<&str>) -> SaleStatus {
        value.and_then(|s| s.parse().ok()).unwrap_or(SaleStatus::Available)
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict, case-insensitive parse. Used by the CLI, where an unknown status
/// should be an argument error rather than a silent default.
impl FromStr for SaleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "available" => Ok(SaleStatus::Available),
            "reserved" => Ok(SaleStatus::Reserved),
            "sold" => Ok(SaleStatus::Sold),
            other => Err(format!(
                "unknown sale status '{other}' (expected available, reserved or sold)"
            )),
        }
    }
}

/// Which half of the body a garment is worn on. `Lower` covers everything
/// that is not explicitly an upper-body piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BodyType {
    Upper,
    Lower,
}

impl BodyType {
    fn from_metadata(value: Option<&str>) -> BodyType {
        match value {
            Some(s) if !s.eq_ignore_ascii_case("upper") => BodyType::Lower,
            _ => BodyType::Upper,
        }
    }
}

/// Garment measurements in centimeters. For upper-body pieces `width` is
/// the chest; for lower-body pieces it is the waist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Measurements {
    pub width: f64,
    pub length: f64,
}

/// One normalized, immutable catalog record.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    /// Unique id, taken from the item directory name.
    pub id: String,
    pub brand: String,
    pub size: String,
    pub body_type: BodyType,
    pub subtype: String,
    pub price_sale: u32,
    /// Alternate (marketplace) price; 0 means "not listed separately".
    pub price_alt: u32,
    pub sale_status: SaleStatus,
    /// Always present — items without a resolvable cover are never built.
    pub cover_image: PathBuf,
    pub gallery: Vec<PathBuf>,
    pub description: String,
    pub measurements: Measurements,
    pub location: String,
}

/// Build an `Item` from parsed metadata and a resolved gallery, applying
/// the default table field by field.
pub fn build_item(id: &str, meta: &RawMetadata, gallery: Gallery) -> Item {
    let finance = meta.finance.as_ref();
    let intel = meta.business_intelligence.as_ref();

    let brand = meta
        .brand
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BRAND)
        .to_uppercase();

    let size = intel
        .and_then(|i| i.real_size_override.as_deref())
        .or(meta.size.as_deref())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SIZE)
        .to_string();

    let measurements = meta
        .measurements
        .as_ref()
        .map(|m| Measurements {
            width: m.width.unwrap_or(0.0),
            length: m.length.unwrap_or(0.0),
        })
        .unwrap_or_default();

    Item {
        id: id.to_string(),
        brand,
        size,
        body_type: BodyType::from_metadata(intel.and_then(|i| i.body_type.as_deref())),
        subtype: meta
            .subtype
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBTYPE.to_string()),
        price_sale: clamp_price(finance.and_then(|f| f.sale_price)),
        price_alt: clamp_price(finance.and_then(|f| f.facebook_price)),
        sale_status: SaleStatus::from_metadata(finance.and_then(|f| f.sale_status.as_deref())),
        cover_image: gallery.cover,
        gallery: gallery.images,
        description: meta.description.clone().unwrap_or_default(),
        measurements,
        location: meta
            .logistics
            .as_ref()
            .and_then(|l| l.location.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
    }
}

/// Prices are non-negative; negative or oversized values collapse to the
/// nearest representable bound instead of failing the record.
fn clamp_price(value: Option<i64>) -> u32 {
    value.unwrap_or(0).clamp(0, u32::MAX as i64) as u32
}
