//! Cover and gallery image resolution for one item directory.
//!
//! Photo sessions export two naming families per item: full-size shots
//! (`{id}_Frente.jpg`, `{id}_Espalda.jpg`, ...) and pre-scaled thumbnails
//! with a `_Mini` suffix. Resolution prefers the thumbnails and falls back
//! to the full-size files when no thumbnails were exported.
//!
//! ## Cover search
//!
//! The cover is the single representative image and is mandatory: an item
//! without one is not shown at all. Candidates are tried in fixed priority
//! order, first existing file wins:
//!
//! 1. `{id}_Frente_Mini.jpg`
//! 2. `{id}_Frente.jpg`
//! 3. `Frente.jpg`
//!
//! ## Gallery assembly
//!
//! All files ending case-insensitively in `_mini.jpg`. If there are none,
//! every `.jpg`/`.jpeg`/`.png` file whose name does not contain the
//! case-insensitive substring `story` (vertical story crops are social-media
//! exports, not catalog photos). The two branches never mix.
//!
//! Ordering is deterministic: filenames are taken in lexicographic order,
//! then a stable sort moves every name containing `frente` (front shot) to
//! the head. Rebuilding from an unchanged directory yields the same order.

use std::fs;
use std::path::{Path, PathBuf};

/// Extensions accepted by the fallback branch, lowercase.
const FALLBACK_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Resolved images for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    pub cover: PathBuf,
    /// May be empty; the cover alone is enough for an item to exist.
    pub images: Vec<PathBuf>,
}

/// Resolve the cover and gallery for `item_dir`.
///
/// Returns `None` when no cover candidate exists — the caller drops the
/// item from the catalog in that case.
pub fn resolve(item_dir: &Path, id: &str) -> Option<Gallery> {
    let cover = find_cover(item_dir, id)?;
    let images = collect_gallery(item_dir);
    Some(Gallery { cover, images })
}

/// First existing cover candidate, in priority order.
fn find_cover(item_dir: &Path, id: &str) -> Option<PathBuf> {
    let candidates = [
        format!("{id}_Frente_Mini.jpg"),
        format!("{id}_Frente.jpg"),
        "Frente.jpg".to_string(),
    ];
    candidates
        .iter()
        .map(|name| item_dir.join(name))
        .find(|path| path.is_file())
}

/// Assemble the ordered gallery for an item directory.
///
/// An unreadable directory yields an empty gallery rather than an error;
/// cover resolution has already proven the directory existed moments ago.
fn collect_gallery(item_dir: &Path) -> Vec<PathBuf> {
    let files = list_files_sorted(item_dir);

    let mut images: Vec<PathBuf> = files
        .iter()
        .filter(|path| lower_name(path).ends_with("_mini.jpg"))
        .cloned()
        .collect();

    if images.is_empty() {
        images = files
            .iter()
            .filter(|path| is_fallback_image(path))
            .cloned()
            .collect();
    }

    // Stable: front shots lead, lexicographic base order breaks ties.
    images.sort_by_key(|path| !lower_name(path).contains("frente"));
    images
}

/// Regular files in `path`, lexicographically sorted.
fn list_files_sorted(path: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files
}

/// Lowercased filename, for case-insensitive suffix/substring checks.
fn lower_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Fallback-branch membership: accepted extension, name free of "story".
fn is_fallback_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    FALLBACK_EXTENSIONS.contains(&ext.as_str()) && !lower_name(path).contains("story")
}
