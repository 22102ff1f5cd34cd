//! Declarative filtering and sorting over a catalog snapshot.
//!
//! A [`Selection`] describes what the presentation layer wants to see:
//! a status set, optional size and brand sets, and exactly one sort mode.
//! [`query`] applies it and returns an ordered sequence of item references;
//! items stay owned by the catalog, nothing is copied.
//!
//! ## Empty-set semantics
//!
//! The status filter is always a membership test: an empty status set
//! selects nothing. The size and brand filters are optional refinements:
//! an empty set means "no restriction". This asymmetry is deliberate
//! catalog behavior (deselecting every status hides everything, the way a
//! status multi-select widget reads) and is preserved exactly — do not
//! unify the three filters.

use crate::catalog::Catalog;
use crate::record::{Item, SaleStatus};

/// How the filtered sequence is ordered. All sorts are stable; ties keep
/// scan discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Descending lexicographic id. Session-prefixed ids make newer items
    /// sort first, hence the name.
    #[default]
    NewestFirst,
    PriceAscending,
    PriceDescending,
}

/// A filter/sort selection, as collected by the presentation layer.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Included only if the item's status is a member. Never "all when
    /// empty" — see the module docs.
    pub statuses: Vec<SaleStatus>,
    /// Empty means no size restriction.
    pub sizes: Vec<String>,
    /// Empty means no brand restriction. Brands are uppercased in the
    /// catalog, so selections should be too.
    pub brands: Vec<String>,
    pub sort: SortMode,
}

impl Default for Selection {
    /// The presentation layer's initial state: available items, newest first.
    fn default() -> Self {
        Selection {
            statuses: vec![SaleStatus::Available],
            sizes: Vec::new(),
            brands: Vec::new(),
            sort: SortMode::NewestFirst,
        }
    }
}

/// Apply a selection to a catalog snapshot.
///
/// Filters compose by logical AND; the sort is stable over discovery order.
pub fn query<'a>(catalog: &'a Catalog, selection: &Selection) -> Vec<&'a Item> {
    let mut out: Vec<&Item> = catalog
        .items()
        .iter()
        .filter(|item| selection.statuses.contains(&item.sale_status))
        .filter(|item| selection.sizes.is_empty() || selection.sizes.contains(&item.size))
        .filter(|item| selection.brands.is_empty() || selection.brands.contains(&item.brand))
        .collect();

    match selection.sort {
        SortMode::NewestFirst => out.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::PriceAscending => out.sort_by_key(|item| item.price_sale),
        SortMode::PriceDescending => out.sort_by_key(|item| std::cmp::Reverse(item.price_sale)),
    }
    out
}
