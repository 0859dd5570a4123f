//! Concrete product predicates
//!
//! Each predicate covers one facet of the catalog controls: the price
//! slider, the three checkbox groups, and the free-text title search.
//! String comparisons are case-insensitive throughout; set-valued
//! predicates lowercase their labels once, at construction.

use rustc_hash::FxHashSet;

use crate::filter::generic::Filter;
use crate::models::Product;

/// Includes products priced at or below an inclusive ceiling
#[derive(Debug, Clone)]
pub struct PriceCeilingFilter {
    ceiling: f64,
}

impl PriceCeilingFilter {
    /// Create a new price ceiling filter
    #[must_use]
    pub fn new(ceiling: f64) -> Self {
        Self { ceiling }
    }
}

impl Filter<Product> for PriceCeilingFilter {
    fn matches(&self, item: &Product) -> bool {
        item.price <= self.ceiling
    }
}

/// Includes products whose collection is in a selected set
#[derive(Debug, Clone)]
pub struct CollectionFilter {
    names: FxHashSet<String>,
}

impl CollectionFilter {
    /// Create a new collection filter from selected labels
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
        }
    }
}

impl Filter<Product> for CollectionFilter {
    fn matches(&self, item: &Product) -> bool {
        self.names.contains(&item.collection.to_lowercase())
    }
}

/// Includes products whose category label is in a selected set
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    names: FxHashSet<String>,
}

impl CategoryFilter {
    /// Create a new category filter from selected labels
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
        }
    }
}

impl Filter<Product> for CategoryFilter {
    fn matches(&self, item: &Product) -> bool {
        self.names.contains(&item.product_type.to_lowercase())
    }
}

/// Includes products carrying at least one selected color
///
/// OR semantics within the attribute: any one of the product's colors in
/// the selected set is enough.
#[derive(Debug, Clone)]
pub struct ColorFilter {
    names: FxHashSet<String>,
}

impl ColorFilter {
    /// Create a new color filter from selected labels
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
        }
    }
}

impl Filter<Product> for ColorFilter {
    fn matches(&self, item: &Product) -> bool {
        item.colors
            .iter()
            .any(|c| self.names.contains(&c.to_lowercase()))
    }
}

/// Includes products whose title contains a search string
#[derive(Debug, Clone)]
pub struct TitleSearchFilter {
    needle: String,
}

impl TitleSearchFilter {
    /// Create a new title search filter
    #[must_use]
    pub fn new(needle: impl AsRef<str>) -> Self {
        Self {
            needle: needle.as_ref().to_lowercase(),
        }
    }
}

impl Filter<Product> for TitleSearchFilter {
    fn matches(&self, item: &Product) -> bool {
        item.title.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        Product::new(
            1,
            "Linen Shirt",
            500.0,
            "Summer",
            "Shirt",
            vec!["Red".to_string(), "White".to_string()],
            vec!["/img/shirt.jpg".to_string()],
        )
    }

    #[test]
    fn test_price_ceiling_is_inclusive() {
        let filter = PriceCeilingFilter::new(500.0);
        assert!(filter.matches(&shirt()));
        assert!(!PriceCeilingFilter::new(499.0).matches(&shirt()));
    }

    #[test]
    fn test_collection_match_is_case_insensitive() {
        let filter = CollectionFilter::new(["SUMMER"]);
        assert!(filter.matches(&shirt()));
        assert!(!CollectionFilter::new(["winter"]).matches(&shirt()));
    }

    #[test]
    fn test_color_matches_any_of_the_products_colors() {
        assert!(ColorFilter::new(["white"]).matches(&shirt()));
        assert!(ColorFilter::new(["blue", "red"]).matches(&shirt()));
        assert!(!ColorFilter::new(["blue"]).matches(&shirt()));
    }

    #[test]
    fn test_title_search_is_substring() {
        assert!(TitleSearchFilter::new("linen").matches(&shirt()));
        assert!(TitleSearchFilter::new("SHIRT").matches(&shirt()));
        assert!(!TitleSearchFilter::new("jacket").matches(&shirt()));
    }
}
