//! Selection state store
//!
//! The catalog controls mutate filter state through a tagged [`Action`]
//! and a pure [`reduce`] function, and a [`SelectionStore`] wires the two
//! to the filter engine: every dispatch applies the reducer, recomputes
//! the visible list, and synchronously publishes it through the sink the
//! host supplied. The store never holds the visible list itself; it is
//! always derived from the catalog and the current selection.

use crate::filter::{Selection, visible_products};
use crate::models::Product;

/// Actions that mutate the filter selection
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Toggle a collection checkbox
    ToggleCollection(String),
    /// Toggle a category checkbox
    ToggleCategory(String),
    /// Toggle a color checkbox
    ToggleColor(String),
    /// Move the price range slider
    SetPriceCeiling(f64),
    /// Replace the free-text search string
    SetSearch(String),
}

/// Apply an action to a selection, returning the next selection
///
/// Pure functional update: the previous selection is untouched. Toggles
/// follow checkbox semantics, so applying the same toggle twice in a row
/// restores the prior selection.
#[must_use]
pub fn reduce(selection: &Selection, action: &Action) -> Selection {
    let mut next = selection.clone();
    match action {
        Action::ToggleCollection(name) => next.toggle_collection(name),
        Action::ToggleCategory(name) => next.toggle_category(name),
        Action::ToggleColor(name) => next.toggle_color(name),
        Action::SetPriceCeiling(value) => next.price_ceiling = *value,
        Action::SetSearch(text) => next.search_text = text.clone(),
    }
    next
}

/// Owns the filter selection and drives recomputation of the visible list
///
/// The host supplies the full catalog and a publish sink; each dispatched
/// action produces exactly one recomputation and one publish before the
/// call returns, so no partial filter state is ever observable.
pub struct SelectionStore<F>
where
    F: FnMut(&[Product]),
{
    catalog: Vec<Product>,
    selection: Selection,
    publish: F,
}

impl<F> std::fmt::Debug for SelectionStore<F>
where
    F: FnMut(&[Product]),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("catalog_len", &self.catalog.len())
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl<F> SelectionStore<F>
where
    F: FnMut(&[Product]),
{
    /// Create a store over the given catalog with an unconstrained selection
    pub fn new(catalog: Vec<Product>, publish: F) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            publish,
        }
    }

    /// The full catalog the store filters over
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// The current filter selection
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Recompute the currently visible products without publishing
    #[must_use]
    pub fn visible(&self) -> Vec<Product> {
        visible_products(&self.catalog, &self.selection)
    }

    /// Replace the full catalog and publish the recomputed visible list
    pub fn set_catalog(&mut self, catalog: Vec<Product>) {
        self.catalog = catalog;
        self.republish();
    }

    /// Apply an action, then recompute and publish the visible list
    pub fn dispatch(&mut self, action: &Action) {
        self.selection = reduce(&self.selection, action);
        self.republish();
    }

    /// Toggle a collection checkbox
    pub fn toggle_collection(&mut self, name: &str) {
        self.dispatch(&Action::ToggleCollection(name.to_string()));
    }

    /// Toggle a category checkbox
    pub fn toggle_category(&mut self, name: &str) {
        self.dispatch(&Action::ToggleCategory(name.to_string()));
    }

    /// Toggle a color checkbox
    pub fn toggle_color(&mut self, name: &str) {
        self.dispatch(&Action::ToggleColor(name.to_string()));
    }

    /// Move the price range slider
    pub fn set_price_ceiling(&mut self, value: f64) {
        self.dispatch(&Action::SetPriceCeiling(value));
    }

    /// Replace the free-text search string
    pub fn set_search(&mut self, text: &str) {
        self.dispatch(&Action::SetSearch(text.to_string()));
    }

    fn republish(&mut self) {
        let visible = visible_products(&self.catalog, &self.selection);
        (self.publish)(&visible);
    }
}
