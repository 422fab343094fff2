//! Persistence for the sort criteria list
//!
//! The engine only needs a string key-value store. Backends implement
//! [`CriteriaStore`] and are injected when the engine is built, so tests can
//! hand in an in-memory fake and an application can keep criteria on disk.

pub mod file;
pub mod in_memory;

pub use file::FileCriteriaStore;
pub use in_memory::InMemoryCriteriaStore;

use crate::core::error::StorageError;
use std::sync::Arc;

/// Key the criteria list is stored under unless configured otherwise
pub const STORAGE_KEY: &str = "sortCriteria";

/// Key-value string store holding the serialized criteria list
///
/// `save` overwrites any previous value for the key. Both operations run
/// synchronously and are called at most once per engine operation.
pub trait CriteriaStore: Send + Sync {
    /// Last value saved under `key`, or `None` if there is none
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: CriteriaStore + ?Sized> CriteriaStore for Arc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

impl<S: CriteriaStore + ?Sized> CriteriaStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}
