//! Domain models for the product catalog
//!
//! This module contains the product entity in both its wire shape (as
//! delivered by the listing endpoint) and its typed internal shape, plus
//! the parse-and-validate boundary between the two.

pub mod product;

pub use product::{Product, RawProduct, parse_items};
