//! Shared fixtures for integration tests

use catalog_filter::Product;

/// The three-product catalog the component scenarios are written against
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Product 1",
            500.0,
            "Summer",
            "Shirt",
            vec!["Red".to_string()],
            vec!["/path/to/image1.jpg".to_string()],
        ),
        Product::new(
            2,
            "Product 2",
            1500.0,
            "Winter",
            "Jacket",
            vec!["Blue".to_string()],
            vec!["/path/to/image2.jpg".to_string()],
        ),
        Product::new(
            3,
            "Product 3",
            10500.0,
            "Winter",
            "Pant",
            vec!["Blue".to_string()],
            vec!["/path/to/image3.jpg".to_string()],
        ),
    ]
}

/// The same three products in their wire envelope form
pub const SAMPLE_ENVELOPE: &str = r#"{
    "items": [
        { "id": 1, "title": "Product 1", "price": "500", "collection": "Summer", "type": "Shirt", "color": ["Red"], "productImg": ["/path/to/image1.jpg"] },
        { "id": 2, "title": "Product 2", "price": "1500", "collection": "Winter", "type": "Jacket", "color": ["Blue"], "productImg": ["/path/to/image2.jpg"] },
        { "id": 3, "title": "Product 3", "price": "10500", "collection": "Winter", "type": "Pant", "color": ["Blue"], "productImg": ["/path/to/image3.jpg"] }
    ]
}"#;
