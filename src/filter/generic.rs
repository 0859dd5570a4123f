//! Generic filtering framework
//!
//! This module provides a trait-based approach to filtering catalog
//! entities. Concrete predicates live in [`crate::filter::predicates`];
//! the combinators here compose them with logical AND/OR/NOT.

use std::fmt::Debug;

/// A generic filter trait that can be applied to any data type
pub trait Filter<T>: Debug {
    /// Whether the given item passes this filter
    fn matches(&self, item: &T) -> bool;
}

/// A filter that always includes all items
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeAllFilter;

impl<T> Filter<T> for IncludeAllFilter {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// A filter that excludes all items
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcludeAllFilter;

impl<T> Filter<T> for ExcludeAllFilter {
    fn matches(&self, _item: &T) -> bool {
        false
    }
}

/// A filter that combines multiple filters with a logical AND
///
/// An empty AND filter imposes no constraint, matching every item.
#[derive(Debug, Default)]
pub struct AndFilter<T> {
    filters: Vec<Box<dyn Filter<T> + Send + Sync>>,
}

impl<T> AndFilter<T> {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<Box<dyn Filter<T> + Send + Sync>>) -> Self {
        Self { filters }
    }

    /// Add a filter to the conjunction
    #[must_use]
    pub fn and(mut self, filter: Box<dyn Filter<T> + Send + Sync>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Number of filters in the conjunction
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the conjunction is empty (and therefore unconstrained)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<T: Debug> Filter<T> for AndFilter<T> {
    fn matches(&self, item: &T) -> bool {
        self.filters.iter().all(|f| f.matches(item))
    }
}

/// A filter that combines multiple filters with a logical OR
///
/// An empty OR filter matches nothing.
#[derive(Debug, Default)]
pub struct OrFilter<T> {
    filters: Vec<Box<dyn Filter<T> + Send + Sync>>,
}

impl<T> OrFilter<T> {
    /// Create a new OR filter
    #[must_use]
    pub fn new(filters: Vec<Box<dyn Filter<T> + Send + Sync>>) -> Self {
        Self { filters }
    }
}

impl<T: Debug> Filter<T> for OrFilter<T> {
    fn matches(&self, item: &T) -> bool {
        self.filters.iter().any(|f| f.matches(item))
    }
}

/// A filter that negates another filter
#[derive(Debug)]
pub struct NotFilter<T> {
    filter: Box<dyn Filter<T> + Send + Sync>,
}

impl<T> NotFilter<T> {
    /// Create a new NOT filter
    #[must_use]
    pub fn new(filter: Box<dyn Filter<T> + Send + Sync>) -> Self {
        Self { filter }
    }
}

impl<T: Debug> Filter<T> for NotFilter<T> {
    fn matches(&self, item: &T) -> bool {
        !self.filter.matches(item)
    }
}
