//! Configuration for the catalog component.

use std::time::Duration;

/// Configuration for catalog loading and filtering
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// URL of the product listing endpoint
    pub endpoint_url: String,
    /// Timeout for the one-shot catalog request
    pub request_timeout: Duration,
    /// Upper bound of the price range control; doubles as the
    /// "show all" sentinel while the slider has not been moved
    pub price_ceiling_max: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "http://localhost:8000/api/products".to_string(),
            request_timeout: Duration::from_secs(10),
            price_ceiling_max: f64::INFINITY,
        }
    }
}

impl CatalogConfig {
    /// Create a configuration pointing at the given endpoint
    #[must_use]
    pub fn with_endpoint(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Self::default()
        }
    }
}
