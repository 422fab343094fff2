//! In-memory implementation of CriteriaStore for testing and development

use crate::core::error::StorageError;
use crate::storage::CriteriaStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory criteria store
///
/// Clones share the same map, so a test can keep one handle while the engine
/// owns another and inspect what was saved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCriteriaStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryCriteriaStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `value` under `key`
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.into());
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    fn unavailable(e: impl std::fmt::Display) -> StorageError {
        StorageError::Unavailable {
            backend: "in-memory".to_string(),
            message: e.to_string(),
        }
    }
}

impl CriteriaStore for InMemoryCriteriaStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .read()
            .map_err(|e| Self::unavailable(format!("failed to acquire read lock: {}", e)))?;

        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| Self::unavailable(format!("failed to acquire write lock: {}", e)))?;

        values.insert(key.to_string(), value.to_string());

        Ok(())
    }
}
