//! Filtering capabilities for the product catalog
//!
//! This module provides the pure filtering engine at the heart of the
//! catalog component: a [`Selection`] of active filters, the concrete
//! predicates they compose into, and [`visible_products`], which derives
//! the visible subset of a catalog. Everything here is synchronous and
//! side-effect free, suitable for isolated unit testing without any
//! rendering context.

pub mod generic;
pub mod predicates;
pub mod selection;

pub use generic::{AndFilter, ExcludeAllFilter, Filter, IncludeAllFilter, NotFilter, OrFilter};
pub use predicates::{
    CategoryFilter, CollectionFilter, ColorFilter, PriceCeilingFilter, TitleSearchFilter,
};
pub use selection::Selection;

use crate::models::Product;

/// Compute the subset of the catalog visible under the given selection
///
/// The result is a subsequence of `catalog`: products appear in their
/// original relative order, and a product appears only if it satisfies
/// every active filter. An inactive filter imposes no constraint, so an
/// untouched selection returns the catalog unchanged.
///
/// # Arguments
/// * `catalog` - The full catalog, in display order
/// * `selection` - The active filter selections
///
/// # Returns
/// The visible products, cloned out of the catalog
#[must_use]
pub fn visible_products(catalog: &[Product], selection: &Selection) -> Vec<Product> {
    let filter = selection.to_filter();

    let visible: Vec<Product> = catalog
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    if visible.is_empty() && !catalog.is_empty() {
        log::debug!(
            "No products matched the current selection ({} in catalog)",
            catalog.len()
        );
    }

    visible
}
