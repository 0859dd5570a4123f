//! Error handling for the catalog filter library.

use thiserror::Error;

/// Specialized error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Error performing the HTTP request to the listing endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Error decoding the response body as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A product carried a price string that does not parse as a number
    #[error("Invalid price '{raw}' for product {id}")]
    InvalidPrice {
        /// Identifier of the offending product
        id: u64,
        /// The raw price string as delivered on the wire
        raw: String,
    },
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
