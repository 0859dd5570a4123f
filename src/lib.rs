//! A Rust library for filtering product catalogs.
//!
//! The crate decomposes the catalog component into a data source adapter
//! (one-shot fetch of the listing envelope), a pure filtering engine, a
//! reducer-driven selection store, and view-model construction. Rendering,
//! routing, and event dispatch stay with the host.

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod source;
pub mod store;
pub mod view;

// Re-export the most common types for easier use
// Core types
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use models::{Product, RawProduct, parse_items};

// Filtering capabilities
pub use filter::{Selection, visible_products};

// Selection state
pub use store::{Action, SelectionStore, reduce};

// Remote loading
pub use source::CatalogSource;

// View models
pub use view::{CatalogView, FacetPanel, NO_ITEMS_FOUND, PRICE_RANGE_TEST_ID, ProductCard};
