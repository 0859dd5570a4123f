//! Filter selection state
//!
//! [`Selection`] holds everything the catalog controls can set: the price
//! ceiling, the three checkbox groups, and the free-text search. It is a
//! plain value; mutation happens through the reducer in [`crate::store`].

use rustc_hash::FxHashSet;

use crate::filter::generic::{AndFilter, Filter};
use crate::filter::predicates::{
    CategoryFilter, CollectionFilter, ColorFilter, PriceCeilingFilter, TitleSearchFilter,
};
use crate::models::Product;

/// The current filter selections for the catalog
///
/// A freshly created selection is unconstrained: the price ceiling sits at
/// the "show all" sentinel, the sets are empty, and the search text is
/// blank. Labels are stored lowercased so that membership checks are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Inclusive upper bound on price; `f64::INFINITY` shows everything
    pub price_ceiling: f64,
    /// Free-text search over the product title, case-insensitive substring
    pub search_text: String,
    collections: FxHashSet<String>,
    categories: FxHashSet<String>,
    colors: FxHashSet<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            price_ceiling: f64::INFINITY,
            search_text: String::new(),
            collections: FxHashSet::default(),
            categories: FxHashSet::default(),
            colors: FxHashSet::default(),
        }
    }
}

impl Selection {
    /// Create an unconstrained selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given collection is currently selected
    #[must_use]
    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.contains(&name.to_lowercase())
    }

    /// Whether the given category is currently selected
    #[must_use]
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.contains(&name.to_lowercase())
    }

    /// Whether the given color is currently selected
    #[must_use]
    pub fn has_color(&self, name: &str) -> bool {
        self.colors.contains(&name.to_lowercase())
    }

    /// Toggle a collection: remove it if selected, add it if not
    pub fn toggle_collection(&mut self, name: &str) {
        toggle(&mut self.collections, name);
    }

    /// Toggle a category: remove it if selected, add it if not
    pub fn toggle_category(&mut self, name: &str) {
        toggle(&mut self.categories, name);
    }

    /// Toggle a color: remove it if selected, add it if not
    pub fn toggle_color(&mut self, name: &str) {
        toggle(&mut self.colors, name);
    }

    /// Whether the given product passes every active filter
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.to_filter().matches(product)
    }

    /// Compose the active predicates into a single AND filter
    ///
    /// Inactive predicates (empty sets, blank search, the "show all"
    /// ceiling) are left out entirely, so an untouched selection composes
    /// to an empty conjunction that imposes no constraint.
    #[must_use]
    pub fn to_filter(&self) -> AndFilter<Product> {
        let mut filters: Vec<Box<dyn Filter<Product> + Send + Sync>> = Vec::new();

        if self.price_ceiling.is_finite() {
            filters.push(Box::new(PriceCeilingFilter::new(self.price_ceiling)));
        }
        if !self.collections.is_empty() {
            filters.push(Box::new(CollectionFilter::new(self.collections.iter())));
        }
        if !self.categories.is_empty() {
            filters.push(Box::new(CategoryFilter::new(self.categories.iter())));
        }
        if !self.colors.is_empty() {
            filters.push(Box::new(ColorFilter::new(self.colors.iter())));
        }
        if !self.search_text.is_empty() {
            filters.push(Box::new(TitleSearchFilter::new(&self.search_text)));
        }

        AndFilter::new(filters)
    }
}

fn toggle(set: &mut FxHashSet<String>, name: &str) {
    let key = name.to_lowercase();
    if !set.remove(&key) {
        set.insert(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_is_unconstrained() {
        let selection = Selection::new();
        assert!(selection.to_filter().is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();
        selection.toggle_collection("Winter");
        assert!(selection.has_collection("winter"));
        selection.toggle_collection("WINTER");
        assert!(!selection.has_collection("Winter"));
    }

    #[test]
    fn test_double_toggle_restores_equality() {
        let original = Selection::new();
        let mut selection = original.clone();
        selection.toggle_color("Blue");
        selection.toggle_color("Blue");
        assert_eq!(selection, original);
    }

    #[test]
    fn test_active_predicates_counted() {
        let mut selection = Selection::new();
        selection.price_ceiling = 1000.0;
        selection.toggle_category("Shirt");
        selection.search_text = "linen".to_string();
        assert_eq!(selection.to_filter().len(), 3);
    }
}
