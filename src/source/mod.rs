//! Data source adapter for the product listing endpoint
//!
//! [`CatalogSource`] issues the one-shot GET that populates the full
//! catalog and runs the wire records through the parse boundary in
//! [`crate::models`]. The [`CatalogSource::populate`] contract mirrors
//! component mount: zero requests when initial data is supplied, exactly
//! one otherwise, and no failure ever escapes to the rendering layer.

use serde::Deserialize;

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::models::{Product, RawProduct, parse_items};

/// JSON envelope returned by the listing endpoint
///
/// A response without an `items` key deserializes to an empty catalog
/// rather than an error.
#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    #[serde(default)]
    items: Vec<RawProduct>,
}

/// Fetches the product catalog from a configured endpoint
#[derive(Debug, Clone)]
pub struct CatalogSource {
    endpoint: String,
    client: reqwest::Client,
}

impl CatalogSource {
    /// Create a source for the configured endpoint
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            endpoint: config.endpoint_url.clone(),
            client,
        })
    }

    /// The endpoint this source fetches from
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and validate the full catalog
    ///
    /// Issues one GET to the listing endpoint, decodes the envelope, and
    /// runs the wire records through the parse boundary. Records with an
    /// unparseable price are dropped there, with a warning.
    ///
    /// # Errors
    /// Returns an error on network failure, a non-success status, or a
    /// body that does not decode as the envelope.
    pub async fn fetch_catalog(&self) -> Result<Vec<Product>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let envelope: CatalogEnvelope = serde_json::from_str(&body)?;

        log::debug!(
            "Fetched {} raw products from {}",
            envelope.items.len(),
            self.endpoint
        );

        Ok(parse_items(envelope.items))
    }

    /// Populate the catalog once, the way a freshly mounted component does
    ///
    /// When `initial` is non-empty it is published as-is and no request is
    /// made. Otherwise exactly one request is issued; on success the
    /// fetched catalog is published, and on any failure (network error,
    /// bad status, malformed body) nothing is published and the failure is
    /// logged — the caller's catalog simply stays empty.
    pub async fn populate<F>(&self, initial: Vec<Product>, mut publish: F)
    where
        F: FnMut(Vec<Product>),
    {
        if !initial.is_empty() {
            log::debug!("Catalog supplied externally, skipping fetch");
            publish(initial);
            return;
        }

        match self.fetch_catalog().await {
            Ok(products) => publish(products),
            Err(err) => log::warn!("Catalog fetch from {} failed: {err}", self.endpoint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_items_is_empty() {
        let envelope: CatalogEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.items.is_empty());
    }

    #[test]
    fn test_envelope_decodes_items() {
        let envelope: CatalogEnvelope = serde_json::from_str(
            r#"{"items": [{
                "id": 1,
                "title": "Product 1",
                "price": "500",
                "collection": "Summer",
                "type": "Shirt",
                "color": ["Red"],
                "productImg": ["/path/to/image1.jpg"]
            }]}"#,
        )
        .unwrap();
        assert_eq!(envelope.items.len(), 1);
        assert_eq!(envelope.items[0].price, "500");
    }
}
