//! The in-memory catalog: build, build report, and the memoized cache.
//!
//! A catalog build is one pass over the content root: scan, then per item
//! parse metadata, resolve images, and normalize into an [`Item`]. Per-item
//! failures never abort the build — each one is recorded as a [`Skipped`]
//! diagnostic with a tagged reason, so a single corrupt item cannot hide the
//! rest of the inventory while the operator can still see what was dropped.
//!
//! ## Caching
//!
//! Building is the only I/O-heavy operation in the crate, so the result is
//! memoized in an explicit single-slot [`CatalogCache`]. The slot lock is
//! held for the duration of a build: concurrent callers serialize, the first
//! one pays the scan cost, and everyone shares the resulting snapshot via
//! `Arc`. `invalidate()` clears the slot; nothing rebuilds implicitly.

use crate::gallery;
use crate::metadata::{self, MetadataOutcome};
use crate::record::{self, Item};
use crate::scan::{self, ItemDir, ScanError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Why an item directory produced no catalog record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("no metadata.json")]
    MissingMetadata,
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("no cover image")]
    MissingCover,
}

/// One skipped-item diagnostic from a catalog build.
#[derive(Debug, Clone)]
pub struct Skipped {
    pub id: String,
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// The full set of successfully built items for one scan of the root,
/// plus the diagnostics for everything that was dropped.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<Item>,
    skipped: Vec<Skipped>,
}

impl Catalog {
    /// Build a catalog from the content root. Fails only when the root
    /// itself cannot be read; every per-item problem becomes a `Skipped`
    /// entry instead.
    pub fn build(root: &Path) -> Result<Catalog, ScanError> {
        let dirs = scan::scan(root)?;

        let mut items = Vec::new();
        let mut skipped = Vec::new();
        for dir in dirs {
            match build_one(&dir) {
                Ok(item) => items.push(item),
                Err(reason) => skipped.push(Skipped {
                    id: dir.id,
                    path: dir.path,
                    reason,
                }),
            }
        }
        Ok(Catalog { items, skipped })
    }

    /// Items in scan discovery order. Not sorted — ordering is the query
    /// engine's job.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Diagnostics for item directories that produced no record.
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct sizes present in the catalog, sorted. Source data for a
    /// size filter widget.
    pub fn sizes(&self) -> Vec<&str> {
        distinct(self.items.iter().map(|i| i.size.as_str()))
    }

    /// Distinct brands present in the catalog, sorted.
    pub fn brands(&self) -> Vec<&str> {
        distinct(self.items.iter().map(|i| i.brand.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = values.collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Build one item record, or say why it can't be built.
fn build_one(dir: &ItemDir) -> Result<Item, SkipReason> {
    let meta = match metadata::load(&dir.path) {
        MetadataOutcome::Parsed(meta) => meta,
        MetadataOutcome::Absent => return Err(SkipReason::MissingMetadata),
        MetadataOutcome::Invalid(cause) => return Err(SkipReason::InvalidMetadata(cause)),
    };
    let gallery = gallery::resolve(&dir.path, &dir.id).ok_or(SkipReason::MissingCover)?;
    Ok(record::build_item(&dir.id, &meta, gallery))
}

/// Explicit single-slot memo for the built catalog.
///
/// Replaces the ambient process-wide cache a naive implementation would
/// reach for: the owner decides where the cache lives and when it is
/// invalidated.
#[derive(Debug, Default)]
pub struct CatalogCache {
    slot: Mutex<Option<Arc<Catalog>>>,
}

impl CatalogCache {
    pub const fn new() -> Self {
        CatalogCache {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached catalog, building it first if the slot is empty.
    ///
    /// The lock is held across the build, so concurrent first callers
    /// serialize and all receive the same snapshot. A failed build leaves
    /// the slot empty; the next caller retries.
    pub fn get_or_build(&self, root: &Path) -> Result<Arc<Catalog>, ScanError> {
        let mut slot = self.lock();
        if let Some(catalog) = slot.as_ref() {
            return Ok(Arc::clone(catalog));
        }
        let catalog = Arc::new(Catalog::build(root)?);
        *slot = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Drop the cached snapshot. The next `get_or_build` rescans.
    pub fn invalidate(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Arc<Catalog>>> {
        // A poisoned lock means a build panicked; the slot itself is still
        // coherent (None or a complete snapshot), so recover it.
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A cover or gallery image that could not be read back at display time.
#[derive(Debug)]
pub struct ImageLoadFailure {
    pub item_id: String,
    pub path: PathBuf,
    pub cause: String,
}

impl fmt::Display for ImageLoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.item_id,
            self.path.display(),
            self.cause
        )
    }
}

/// Check that every recorded cover and gallery path is still a readable
/// file. Failures are per-image and collected, never fatal — the catalog
/// stays displayable around a missing photo.
pub fn verify_images(catalog: &Catalog) -> Vec<ImageLoadFailure> {
    let mut failures = Vec::new();
    for item in catalog.items() {
        let paths = std::iter::once(&item.cover_image).chain(item.gallery.iter());
        for path in paths {
            if let Err(err) = std::fs::File::open(path) {
                failures.push(ImageLoadFailure {
                    item_id: item.id.clone(),
                    path: path.clone(),
                    cause: err.to_string(),
                });
            }
        }
    }
    failures
}
