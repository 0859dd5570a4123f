//! View-model construction for the catalog component
//!
//! The rendering framework itself stays external; this module builds the
//! structures a host renders from: a facet panel of discoverable filter
//! controls, a card per visible product, and the "No Items Found"
//! placeholder when nothing passes the filters.

use std::fmt;

use itertools::Itertools;

use crate::config::CatalogConfig;
use crate::filter::Selection;
use crate::models::Product;

/// Placeholder text shown when no product passes the filters
pub const NO_ITEMS_FOUND: &str = "No Items Found";

/// Test-observable identity of the price range control
pub const PRICE_RANGE_TEST_ID: &str = "price-range";

/// A labeled checkbox control for one facet value
///
/// The label doubles as the accessible name assistive and test tooling
/// locate the control by.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxControl {
    /// Visible label, taken verbatim from the catalog value
    pub label: String,
    /// Whether the value is currently selected
    pub checked: bool,
}

/// The price range slider descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct RangeControl {
    /// Identity used by test tooling to locate the slider
    pub test_id: &'static str,
    /// Lower bound of the slider
    pub min: f64,
    /// Upper bound of the slider
    pub max: f64,
    /// Current slider position
    pub value: f64,
}

/// All filter controls discoverable from the current full catalog
#[derive(Debug, Clone, PartialEq)]
pub struct FacetPanel {
    /// The price range slider
    pub price_range: RangeControl,
    /// One checkbox per distinct collection, in first-seen order
    pub collections: Vec<CheckboxControl>,
    /// One checkbox per distinct category, in first-seen order
    pub categories: Vec<CheckboxControl>,
    /// One checkbox per distinct color, in first-seen order
    pub colors: Vec<CheckboxControl>,
}

impl FacetPanel {
    /// Build the facet panel from the full catalog and current selection
    #[must_use]
    pub fn from_catalog(catalog: &[Product], selection: &Selection, config: &CatalogConfig) -> Self {
        let collections = catalog
            .iter()
            .map(|p| p.collection.as_str())
            .unique()
            .map(|label| CheckboxControl {
                label: label.to_string(),
                checked: selection.has_collection(label),
            })
            .collect();

        let categories = catalog
            .iter()
            .map(|p| p.product_type.as_str())
            .unique()
            .map(|label| CheckboxControl {
                label: label.to_string(),
                checked: selection.has_category(label),
            })
            .collect();

        let colors = catalog
            .iter()
            .flat_map(|p| p.colors.iter().map(String::as_str))
            .unique()
            .map(|label| CheckboxControl {
                label: label.to_string(),
                checked: selection.has_color(label),
            })
            .collect();

        let max = config.price_ceiling_max;
        Self {
            price_range: RangeControl {
                test_id: PRICE_RANGE_TEST_ID,
                min: 0.0,
                max,
                value: selection.price_ceiling.min(max),
            },
            collections,
            categories,
            colors,
        }
    }
}

/// One visible product, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Product identifier
    pub id: u64,
    /// Display name
    pub title: String,
    /// Category label shown under the title
    pub category: String,
    /// Numeric price
    pub price: f64,
    /// Primary thumbnail: first image URL, empty when the product has none
    pub image_src: String,
    /// Alternate text for the thumbnail, equal to the title
    pub alt_text: String,
    /// Navigable identifier for the detail view; routing is external
    pub detail_href: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            category: product.product_type.clone(),
            price: product.price,
            image_src: product.images.first().cloned().unwrap_or_default(),
            alt_text: product.title.clone(),
            detail_href: format!("/product/{}", product.id),
        }
    }
}

/// The fully derived view of the catalog component
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Filter controls derived from the full catalog
    pub facets: FacetPanel,
    /// One card per visible product, in catalog order
    pub cards: Vec<ProductCard>,
    /// Set to [`NO_ITEMS_FOUND`] when no product passes the filters
    pub placeholder: Option<&'static str>,
}

impl CatalogView {
    /// Build the view from the full catalog and the visible subset
    #[must_use]
    pub fn build(
        catalog: &[Product],
        visible: &[Product],
        selection: &Selection,
        config: &CatalogConfig,
    ) -> Self {
        let cards: Vec<ProductCard> = visible.iter().map(ProductCard::from).collect();
        let placeholder = cards.is_empty().then_some(NO_ITEMS_FOUND);

        Self {
            facets: FacetPanel::from_catalog(catalog, selection, config),
            cards,
            placeholder,
        }
    }
}

impl fmt::Display for CatalogView {
    /// Plain-text rendering for hosts without a DOM
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.placeholder {
            Some(placeholder) => writeln!(f, "{placeholder}"),
            None => {
                for card in &self.cards {
                    writeln!(f, "{} ({}) - {}", card.title, card.category, card.price)?;
                }
                Ok(())
            }
        }
    }
}
