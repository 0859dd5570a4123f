//! Product entity model
//!
//! The listing endpoint delivers products with the price encoded as a
//! string. Raw wire records are validated into typed [`Product`] values
//! exactly once, at this boundary; price strings never reach comparison
//! logic.

use serde::Deserialize;

use crate::error::CatalogError;

/// Product as delivered by the listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    /// Unique product identifier
    pub id: u64,
    /// Display name
    pub title: String,
    /// Price as a decimal string, e.g. `"1500"`
    pub price: String,
    /// Seasonal line the product belongs to
    pub collection: String,
    /// Category label, e.g. the garment type
    #[serde(rename = "type")]
    pub product_type: String,
    /// Color names; a product may carry several
    #[serde(default)]
    pub color: Vec<String>,
    /// Image URLs; the first entry is the primary thumbnail
    #[serde(rename = "productImg", default)]
    pub product_img: Vec<String>,
}

/// Typed product used everywhere past the wire boundary
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique product identifier
    pub id: u64,
    /// Display name
    pub title: String,
    /// Numeric price, parsed once from the wire string
    pub price: f64,
    /// Seasonal line the product belongs to
    pub collection: String,
    /// Category label, e.g. the garment type
    pub product_type: String,
    /// Color names; a product may carry several
    pub colors: Vec<String>,
    /// Image URLs; the first entry is the primary thumbnail
    pub images: Vec<String>,
}

impl Product {
    /// Create a new product
    #[must_use]
    pub fn new(
        id: u64,
        title: impl Into<String>,
        price: f64,
        collection: impl Into<String>,
        product_type: impl Into<String>,
        colors: Vec<String>,
        images: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            collection: collection.into(),
            product_type: product_type.into(),
            colors,
            images,
        }
    }
}

impl TryFrom<RawProduct> for Product {
    type Error = CatalogError;

    /// Validate a wire record into a typed product
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidPrice`] when the price string is not
    /// a finite, non-negative number.
    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let price = raw
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0);

        let Some(price) = price else {
            return Err(CatalogError::InvalidPrice {
                id: raw.id,
                raw: raw.price,
            });
        };

        Ok(Self {
            id: raw.id,
            title: raw.title,
            price,
            collection: raw.collection,
            product_type: raw.product_type,
            colors: raw.color,
            images: raw.product_img,
        })
    }
}

/// Validate a batch of wire records into typed products
///
/// Products with an unparseable price are excluded from the catalog and
/// logged; the exclusion policy is deterministic so the same wire payload
/// always yields the same catalog.
///
/// # Arguments
/// * `items` - The raw records from the listing envelope
///
/// # Returns
/// The typed products, in wire order
#[must_use]
pub fn parse_items(items: Vec<RawProduct>) -> Vec<Product> {
    let mut products = Vec::with_capacity(items.len());

    for raw in items {
        match Product::try_from(raw) {
            Ok(product) => products.push(product),
            Err(err) => log::warn!("Skipping product with invalid price: {err}"),
        }
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: u64, price: &str) -> RawProduct {
        RawProduct {
            id,
            title: format!("Product {id}"),
            price: price.to_string(),
            collection: "Summer".to_string(),
            product_type: "Shirt".to_string(),
            color: vec!["Red".to_string()],
            product_img: vec!["/path/to/image.jpg".to_string()],
        }
    }

    #[test]
    fn test_price_parsed_at_boundary() {
        let product = Product::try_from(raw(1, "500")).unwrap();
        assert_eq!(product.price, 500.0);
        assert_eq!(product.title, "Product 1");
    }

    #[test]
    fn test_whitespace_in_price_tolerated() {
        let product = Product::try_from(raw(1, " 1500 ")).unwrap();
        assert_eq!(product.price, 1500.0);
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let err = Product::try_from(raw(7, "free")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice { id: 7, .. }));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(Product::try_from(raw(1, "-5")).is_err());
        assert!(Product::try_from(raw(1, "NaN")).is_err());
        assert!(Product::try_from(raw(1, "inf")).is_err());
    }

    #[test]
    fn test_parse_items_excludes_invalid_prices() {
        let items = vec![raw(1, "500"), raw(2, "oops"), raw(3, "10500")];
        let products = parse_items(items);
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "id": 2,
            "title": "Product 2",
            "price": "1500",
            "collection": "Winter",
            "type": "Jacket",
            "color": ["Blue"],
            "productImg": ["/path/to/image2.jpg"]
        }"#;
        let raw: RawProduct = serde_json::from_str(json).unwrap();
        assert_eq!(raw.product_type, "Jacket");
        assert_eq!(raw.product_img, vec!["/path/to/image2.jpg"]);
    }
}
