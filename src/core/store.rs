//! Store traits for filtering and sorting

use crate::core::criteria::SortCriterion;
use crate::core::query::{derive_view, filter_by_search};
use crate::core::record::Record;
use std::sync::Arc;

/// Trait for stores that support filtering and sorting
///
/// Implement this trait for record collections that can be queried with a
/// free-text search term and an ordered list of sort criteria.
pub trait QueryableStore<T>: Send + Sync {
    /// Apply a search term to a collection of records
    ///
    /// # Parameters
    /// - `data`: Collection of records to filter
    /// - `term`: Case-insensitive search term, empty keeps everything
    ///
    /// # Returns
    /// Filtered collection, in input order
    fn apply_filters(&self, data: Vec<T>, term: &str) -> Vec<T>;

    /// Apply sorting to a collection of records
    ///
    /// # Parameters
    /// - `data`: Collection of records to sort
    /// - `criteria`: Sort keys in priority order
    ///
    /// # Returns
    /// Stably sorted collection
    fn apply_sort(&self, data: Vec<T>, criteria: &[SortCriterion]) -> Vec<T>;

    /// Get all records (unfiltered, unsorted)
    fn list_all(&self) -> Vec<T>;
}

/// The fixed, canonical record collection behind a table view
///
/// Every derivation starts from this order, never from a previously sorted
/// view. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct RecordSet<R> {
    records: Arc<[R]>,
}

impl<R: Record> RecordSet<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by id
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }
}

impl<R: Record> From<Vec<R>> for RecordSet<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

impl<R: Record> QueryableStore<R> for RecordSet<R> {
    fn apply_filters(&self, data: Vec<R>, term: &str) -> Vec<R> {
        filter_by_search(data, term)
    }

    fn apply_sort(&self, data: Vec<R>, criteria: &[SortCriterion]) -> Vec<R> {
        derive_view(&data, criteria)
    }

    fn list_all(&self) -> Vec<R> {
        self.records.to_vec()
    }
}
