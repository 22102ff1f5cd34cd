//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! 001 LEVIS Denim jacket [M] $12,000 Available
//!     Cover: CAM-1_Frente_Mini.jpg (3 photos)
//!     Id: CAM-1  Location: Box 4
//!     Measurements: 52 x 68.5 cm
//!     Facebook price: $13,500
//!     Light wash, minor wear on cuffs
//! 002 ZARA Garment [S] $8,000 Sold
//!     Cover: Frente.jpg (1 photo)
//!     Id: CAM-2  Location: ?
//!
//! Showing 2 of 2 items (page 1 of 1)
//! ```
//!
//! ## Report
//!
//! ```text
//! Skipped 2 of 5 item directories
//! NOMETA: no metadata.json
//!     Source: catalog/S1/Tops/NOMETA
//! BAD: invalid metadata: expected value at line 1 column 3
//!     Source: catalog/S1/Tops/BAD
//! ```
//!
//! ## Check
//!
//! ```text
//! CAM-1: catalog/S1/Tops/CAM-1/CAM-1_Espalda_Mini.jpg (No such file ...)
//! 1 unreadable image across 3 items
//! ```
//!
//! ## Filters
//!
//! ```text
//! Sizes: L, M, S
//! Brands: GAP, LEVIS, ZARA
//! ```

use crate::catalog::{Catalog, ImageLoadFailure};
use crate::paging::{PAGE_SIZE, PageView, page_count};
use crate::record::{BodyType, Item};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a price with thousands separators: `12000` → `"$12,000"`.
fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Trim a trailing `.0` so whole centimeters print without a decimal.
fn format_cm(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Format one item: header line plus indented context lines.
fn format_item(index: usize, item: &Item) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} {} [{}] {} {}",
        format_index(index),
        item.brand,
        item.subtype,
        item.size,
        format_price(item.price_sale),
        item.sale_status,
    )];

    let cover = item
        .cover_image
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let photos = match item.gallery.len() {
        1 => "1 photo".to_string(),
        n => format!("{n} photos"),
    };
    lines.push(format!("    Cover: {cover} ({photos})"));
    lines.push(format!("    Id: {}  Location: {}", item.id, item.location));

    let m = item.measurements;
    if m.width != 0.0 || m.length != 0.0 {
        let line = match item.body_type {
            BodyType::Upper => format!(
                "    Measurements: {} x {} cm",
                format_cm(m.width),
                format_cm(m.length)
            ),
            BodyType::Lower => format!(
                "    Waist: {} cm | Length: {} cm",
                format_cm(m.width),
                format_cm(m.length)
            ),
        };
        lines.push(line);
    }

    if item.price_alt > 0 {
        lines.push(format!("    Facebook price: {}", format_price(item.price_alt)));
    }
    if !item.description.is_empty() {
        lines.push(format!("    {}", item.description));
    }
    lines
}

/// Format one page of a filtered listing.
///
/// `total` is the size of the whole filtered sequence, `cursor` the
/// zero-based page index the view was sliced at.
pub fn format_list(page: &PageView<'_, &Item>, total: usize, cursor: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, item) in page.items.iter().enumerate() {
        lines.extend(format_item(cursor * PAGE_SIZE + i + 1, item));
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Showing {} of {} items (page {} of {})",
        page.items.len(),
        total,
        cursor + 1,
        page_count(total).max(1),
    ));
    lines
}

/// Format the skipped-item report for a build.
pub fn format_report(catalog: &Catalog) -> Vec<String> {
    let scanned = catalog.len() + catalog.skipped().len();
    let mut lines = vec![format!(
        "Skipped {} of {} item directories",
        catalog.skipped().len(),
        scanned
    )];
    for skipped in catalog.skipped() {
        lines.push(format!("{}: {}", skipped.id, skipped.reason));
        lines.push(format!("    Source: {}", skipped.path.display()));
    }
    lines
}

/// Format the distinct filter values present in a catalog — the source
/// data for size and brand selection widgets.
pub fn format_filters(catalog: &Catalog) -> Vec<String> {
    vec![
        format!("Sizes: {}", catalog.sizes().join(", ")),
        format!("Brands: {}", catalog.brands().join(", ")),
    ]
}

/// Format the image readability check. One line per failure, then a summary.
pub fn format_check(catalog: &Catalog, failures: &[ImageLoadFailure]) -> Vec<String> {
    let mut lines: Vec<String> = failures.iter().map(|f| f.to_string()).collect();
    lines.push(match failures.len() {
        0 => format!("All images readable across {} items", catalog.len()),
        1 => format!("1 unreadable image across {} items", catalog.len()),
        n => format!("{} unreadable images across {} items", n, catalog.len()),
    });
    lines
}

pub fn print_list(page: &PageView<'_, &Item>, total: usize, cursor: usize) {
    for line in format_list(page, total, cursor) {
        println!("{line}");
    }
}

pub fn print_report(catalog: &Catalog) {
    for line in format_report(catalog) {
        println!("{line}");
    }
}

pub fn print_check(catalog: &Catalog, failures: &[ImageLoadFailure]) {
    for line in format_check(catalog, failures) {
        println!("{line}");
    }
}

pub fn print_filters(catalog: &Catalog) {
    for line in format_filters(catalog) {
        println!("{line}");
    }
}
