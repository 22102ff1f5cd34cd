//! # Stockroom
//!
//! A filesystem-backed inventory catalog for second-hand garments.
//! Your filesystem is the data source: each item is a directory holding one
//! `metadata.json` and a folder of photos, organized three levels deep as
//! collection → category → item.
//!
//! # Architecture: Build, Then Query
//!
//! The crate separates the expensive part (building the catalog from disk)
//! from the cheap part (querying a built snapshot):
//!
//! ```text
//! 1. Build   root/  →  Catalog        (scan + parse + resolve + normalize)
//! 2. Query   Catalog + Selection  →  ordered Vec<&Item>
//! 3. Page    sequence + cursor    →  24-item PageView
//! ```
//!
//! A build runs to completion synchronously and is memoized in an explicit
//! [`catalog::CatalogCache`]; queries and pagination operate on the cached
//! snapshot and never touch the disk. Rebuilds happen only on explicit
//! invalidation — an operator action, not a side effect of reading.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the three-level content root, yields item directories |
//! | [`metadata`] | Loads and parses the per-item `metadata.json` document |
//! | [`gallery`] | Resolves each item's cover image and ordered photo gallery |
//! | [`record`] | The normalized immutable `Item` and its default table |
//! | [`catalog`] | Catalog build, skipped-item report, memoized cache |
//! | [`query`] | Declarative filter/sort selections over a snapshot |
//! | [`paging`] | Fixed-size pagination and the page cursor |
//! | [`output`] | CLI output formatting — pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## Fail-Soft Per Item
//!
//! A catalog build only fails when the content root itself is unreadable.
//! Everything else — missing metadata, malformed JSON, no cover image — is
//! isolated to the item that caused it and recorded as a tagged diagnostic
//! in the build report ([`catalog::Catalog::skipped`]). One corrupt item
//! must never hide the rest of the inventory, but the drop is observable
//! rather than silent.
//!
//! ## Cover-Or-Nothing
//!
//! An item with no resolvable cover image is not constructed at all. The
//! cover is the one field without a default: every other missing metadata
//! field degrades to a documented placeholder value instead.
//!
//! ## References Out, Never Copies
//!
//! [`query::query`] returns `Vec<&Item>` into the catalog snapshot and
//! [`paging::paginate`] returns a borrowed slice of that sequence. Items
//! are built once per scan and never cloned or mutated on the read path.
//!
//! ## Deterministic Ordering
//!
//! Scan discovery order and gallery order are lexicographic rather than
//! OS enumeration order, and every sort is stable with discovery order as
//! the tie-break. Rebuilding from an unchanged tree yields byte-identical
//! listings.

pub mod catalog;
pub mod gallery;
pub mod metadata;
pub mod output;
pub mod paging;
pub mod query;
pub mod record;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
